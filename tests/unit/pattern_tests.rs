//! Unit tests for node/relationship/path pattern rendering, escaping rules,
//! and variable-length specifiers.

#[cfg(test)]
mod pattern_tests {
    use cypherforge::expression::{Parameter, Variable};
    use cypherforge::pattern::{
        NodePattern, PathPattern, RelationshipPattern, VariableLengthSpec,
    };
    use cypherforge::renderer::build;

    #[test]
    fn test_node_rendering() {
        let compiled = build(&PathPattern::from(NodePattern::new())).unwrap();
        assert_eq!(compiled.text, "(this0)");

        let compiled = build(&PathPattern::from(
            NodePattern::labeled("Movie").label("Film"),
        ))
        .unwrap();
        assert_eq!(compiled.text, "(this0:`Movie`:`Film`)");
    }

    #[test]
    fn test_node_properties_are_parameterized() {
        let node = NodePattern::labeled("Movie").property("title", "The Matrix");
        let compiled = build(&PathPattern::from(node)).unwrap();
        assert_eq!(compiled.text, "(this0:`Movie` { title: $param0 })");
        assert_eq!(
            compiled.parameters.get("param0"),
            Some(&cypherforge::Value::String("The Matrix".into()))
        );
    }

    #[test]
    fn test_explicit_variables_render_verbatim() {
        let node = NodePattern::labeled("Movie").with_variable(Variable::named("movie"));
        let compiled = build(&PathPattern::from(node)).unwrap();
        assert_eq!(compiled.text, "(movie:`Movie`)");
    }

    #[test]
    fn test_unsafe_label_and_key_escaping() {
        let node = NodePattern::labeled("Has Space").property("first name", 1i64);
        let compiled = build(&PathPattern::from(node)).unwrap();
        assert_eq!(
            compiled.text,
            "(this0:`Has Space` { `first name`: $param0 })"
        );
    }

    #[test]
    fn test_outgoing_path_rendering() {
        let path = NodePattern::labeled("Person").related_to(
            RelationshipPattern::outgoing("ACTED_IN"),
            NodePattern::labeled("Movie"),
        );
        let compiled = build(&path).unwrap();
        assert_eq!(
            compiled.text,
            "(this0:`Person`)-[this1:`ACTED_IN`]->(this2:`Movie`)"
        );
    }

    #[test]
    fn test_incoming_and_undirected_arrows() {
        let path = NodePattern::labeled("Movie").related_to(
            RelationshipPattern::incoming("ACTED_IN"),
            NodePattern::labeled("Person"),
        );
        let compiled = build(&path).unwrap();
        assert_eq!(
            compiled.text,
            "(this0:`Movie`)<-[this1:`ACTED_IN`]-(this2:`Person`)"
        );

        let path = NodePattern::labeled("Person").related_to(
            RelationshipPattern::either("KNOWS"),
            NodePattern::labeled("Person"),
        );
        let compiled = build(&path).unwrap();
        assert_eq!(
            compiled.text,
            "(this0:`Person`)-[this1:`KNOWS`]-(this2:`Person`)"
        );
    }

    #[test]
    fn test_multi_hop_chain_extension() {
        let path = NodePattern::labeled("A")
            .related_to(RelationshipPattern::outgoing("R1"), NodePattern::labeled("B"))
            .extend(RelationshipPattern::outgoing("R2"), NodePattern::labeled("C"));
        let compiled = build(&path).unwrap();
        assert_eq!(
            compiled.text,
            "(this0:`A`)-[this1:`R1`]->(this2:`B`)-[this3:`R2`]->(this4:`C`)"
        );
    }

    #[test]
    fn test_variable_length_rendering() {
        let path = NodePattern::labeled("Person").related_to(
            RelationshipPattern::outgoing("KNOWS")
                .length(VariableLengthSpec::range(1, 3).unwrap()),
            NodePattern::labeled("Person"),
        );
        let compiled = build(&path).unwrap();
        assert_eq!(
            compiled.text,
            "(this0:`Person`)-[this1:`KNOWS`*1..3]->(this2:`Person`)"
        );
    }

    #[test]
    fn test_named_path_binding() {
        let path = NodePattern::labeled("A")
            .related_to(RelationshipPattern::outgoing("R"), NodePattern::labeled("B"))
            .named();
        let compiled = build(&path).unwrap();
        assert_eq!(compiled.text, "p0 = (this0:`A`)-[this1:`R`]->(this2:`B`)");
    }

    #[test]
    fn test_relationship_renders_decomposed_without_endpoints() {
        let relationship =
            RelationshipPattern::outgoing("ACTED_IN").property("role", Parameter::new("Neo"));
        let compiled = build(&relationship).unwrap();
        assert_eq!(compiled.text, "[this0:`ACTED_IN` { role: $param0 }]");
    }

    #[test]
    fn test_relationship_properties_and_length_combine() {
        let path = NodePattern::new().related_to(
            RelationshipPattern::outgoing("KNOWS")
                .length(VariableLengthSpec::max_only(5))
                .property("since", 2020i64),
            NodePattern::new(),
        );
        let compiled = build(&path).unwrap();
        assert_eq!(
            compiled.text,
            "(this0)-[this1:`KNOWS`*..5 { since: $param0 }]->(this2)"
        );
    }
}
