//! End-to-end scenarios compiled through the public API only.

#[cfg(test)]
mod query_building_tests {
    use cypherforge::clause::{
        Call, Create, Delete, Foreach, Match, Return, Statement, Union, Unwind, With,
    };
    use cypherforge::expression::{operators, Parameter, Variable};
    use cypherforge::pattern::{NodePattern, RelationshipPattern};
    use cypherforge::renderer::build;
    use cypherforge::Value;

    /// The canonical smoke test: one labeled node, one equality filter, one
    /// projected property.
    #[test]
    fn test_match_filter_return() {
        let movie = NodePattern::labeled("Movie");
        let statement = Statement::new()
            .clause(Match::new(movie.clone()).filter(operators::eq(
                movie.prop("title"),
                Parameter::new("The Matrix"),
            )))
            .clause(Return::new().item(movie.prop("title")));
        let compiled = build(&statement).unwrap();
        assert_eq!(
            compiled.text,
            "MATCH (this0:`Movie`)\nWHERE this0.title = $param0\nRETURN this0.title"
        );
        assert_eq!(
            compiled.parameters.get("param0"),
            Some(&Value::String("The Matrix".into()))
        );
    }

    /// Every distinct anonymous identity gets a distinct name; every
    /// occurrence of one identity uses the same name.
    #[test]
    fn test_name_stability_across_clauses() {
        let person = NodePattern::labeled("Person");
        let movie = NodePattern::labeled("Movie");
        let path = person.clone().related_to(
            RelationshipPattern::outgoing("ACTED_IN"),
            movie.clone(),
        );
        let statement = Statement::new()
            .clause(Match::new(path))
            .clause(
                With::new()
                    .item(person.variable())
                    .item(movie.variable()),
            )
            .clause(
                Return::new()
                    .item(person.prop("name"))
                    .item(movie.prop("title")),
            );
        let compiled = build(&statement).unwrap();
        assert_eq!(
            compiled.text,
            "MATCH (this0:`Person`)-[this1:`ACTED_IN`]->(this2:`Movie`)\n\
             WITH this0, this2\n\
             RETURN this0.name, this2.title"
        );
    }

    /// One parameter instance referenced from several locations produces a
    /// single map entry and one shared name.
    #[test]
    fn test_parameter_deduplication_by_identity() {
        let shared = Parameter::new("shared-value");
        let a = NodePattern::labeled("A");
        let b = NodePattern::labeled("B");
        let statement = Statement::new()
            .clause(
                Create::new(a.clone())
                    .pattern(b.clone())
                    .set(a.prop("value"), shared.clone())
                    .set(b.prop("value"), shared.clone()),
            );
        let compiled = build(&statement).unwrap();
        assert_eq!(
            compiled.text,
            "CREATE (this0:`A`), (this1:`B`)\nSET this0.value = $param0, this1.value = $param0"
        );
        assert_eq!(compiled.parameters.len(), 1);
        assert_eq!(
            compiled.parameters.get("param0"),
            Some(&Value::String("shared-value".into()))
        );
    }

    /// Two separately constructed parameters with equal values stay distinct.
    #[test]
    fn test_equal_values_do_not_merge_without_shared_identity() {
        let a = NodePattern::labeled("A").property("v", Parameter::new(1i64));
        let b = NodePattern::labeled("B").property("v", Parameter::new(1i64));
        let compiled = build(&Create::new(a).pattern(b)).unwrap();
        assert_eq!(compiled.parameters.len(), 2);
        assert!(compiled.parameters.contains_key("param0"));
        assert!(compiled.parameters.contains_key("param1"));
    }

    /// A foreach body compiles in a child scope: no leading separator inside
    /// the wrapper, and no name collisions with the outer statement.
    #[test]
    fn test_foreach_body_scoping() {
        let person = NodePattern::labeled("Person");
        let element = Variable::new();
        let statement = Statement::new()
            .clause(Match::new(person.clone()))
            .clause(Foreach::new(
                element.clone(),
                Parameter::new(vec![1i64, 2, 3]),
                Create::new(NodePattern::labeled("Entry").property("rank", element.clone())),
            ))
            .clause(Return::new().item(person.variable()));
        let compiled = build(&statement).unwrap();
        assert_eq!(
            compiled.text,
            "MATCH (this0:`Person`)\n\
             FOREACH (var0 IN $param0 | CREATE (this1:`Entry` { rank: var0 }))\n\
             RETURN this0"
        );
    }

    /// Subquery bodies surface their parameters into the one flat map.
    #[test]
    fn test_call_subquery_parameters_surface() {
        let movie = NodePattern::labeled("Movie").property("title", Parameter::new("Dune"));
        let subquery = Call::new(
            Statement::new()
                .clause(Match::new(movie.clone()))
                .clause(Return::new().item(movie.variable())),
        );
        let statement = Statement::new().clause(subquery).clause(Return::star());
        let compiled = build(&statement).unwrap();
        assert_eq!(
            compiled.text,
            "CALL {\n    MATCH (this0:`Movie` { title: $param0 })\n    RETURN this0\n}\nRETURN *"
        );
        assert_eq!(compiled.parameters.len(), 1);
    }

    /// Union branches parameterize independently without name collisions.
    #[test]
    fn test_union_branch_parameters() {
        let movie = NodePattern::labeled("Movie").property("title", Parameter::new("Dune"));
        let show = NodePattern::labeled("Show").property("title", Parameter::new("Dark"));
        let branch_a = Statement::new()
            .clause(Match::new(movie.clone()))
            .clause(Return::new().item(movie.variable()));
        let branch_b = Statement::new()
            .clause(Match::new(show.clone()))
            .clause(Return::new().item(show.variable()));
        let compiled = build(&Union::new(vec![branch_a, branch_b]).unwrap()).unwrap();
        assert_eq!(
            compiled.text,
            "MATCH (this0:`Movie` { title: $param0 })\nRETURN this0\n\
             UNION\n\
             MATCH (this1:`Show` { title: $param1 })\nRETURN this1"
        );
        assert_eq!(compiled.parameters.len(), 2);
    }

    /// Compiling the same untouched AST twice is side-effect-free and yields
    /// textually identical output.
    #[test]
    fn test_repeated_builds_are_idempotent() {
        let person = NodePattern::labeled("Person");
        let friend = NodePattern::labeled("Person");
        let statement = Statement::new()
            .clause(
                Match::new(person.clone().related_to(
                    RelationshipPattern::either("KNOWS"),
                    friend.clone(),
                ))
                .filter(operators::eq(person.prop("name"), Parameter::new("Alice"))),
            )
            .clause(Return::new().item(friend.prop("name")));
        let first = build(&statement).unwrap();
        let second = build(&statement).unwrap();
        assert_eq!(first.text, second.text);
        assert_eq!(first.parameters, second.parameters);
    }

    /// A pipeline with UNWIND, aggregation-style WITH, and a final DELETE.
    #[test]
    fn test_unwind_with_delete_pipeline() {
        let id = Variable::new();
        let node = NodePattern::labeled("Task");
        let statement = Statement::new()
            .clause(Unwind::new(Parameter::new(vec![1i64, 2]), id.clone()))
            .clause(Match::new(node.clone()).filter(operators::eq(node.prop("id"), id.clone())))
            .clause(Delete::new(vec![node.variable().clone()]).unwrap().detach());
        let compiled = build(&statement).unwrap();
        assert_eq!(
            compiled.text,
            "UNWIND $param0 AS var0\n\
             MATCH (this0:`Task`)\nWHERE this0.id = var0\n\
             DETACH DELETE this0"
        );
    }
}
