//! Unit tests for expression rendering: operators, precedence-driven
//! parenthesization, function calls, comprehensions, and the raw escape
//! hatch.

#[cfg(test)]
mod expression_tests {
    use cypherforge::expression::raw::RawFragment;
    use cypherforge::expression::{
        functions, operators, IntoExpression, ListComprehension, Literal, Parameter,
        RawExpression, Variable,
    };
    use cypherforge::renderer::build;

    #[test]
    fn test_comparison_operators_render_bare() {
        let compiled = build(&operators::eq(Variable::named("n"), Literal::new(1i64))).unwrap();
        assert_eq!(compiled.text, "n = 1");

        let compiled = build(&operators::neq(Variable::named("n"), Literal::new(1i64))).unwrap();
        assert_eq!(compiled.text, "n <> 1");
    }

    #[test]
    fn test_string_predicates() {
        let name = Variable::named("n").property("name");
        let compiled =
            build(&operators::starts_with(name.clone(), Literal::new("A"))).unwrap();
        assert_eq!(compiled.text, "n.name STARTS WITH \"A\"");

        let compiled = build(&operators::contains(name, Literal::new("b"))).unwrap();
        assert_eq!(compiled.text, "n.name CONTAINS \"b\"");
    }

    #[test]
    fn test_or_under_and_is_parenthesized() {
        let a = operators::eq(Variable::named("a"), Literal::new(1i64));
        let b = operators::eq(Variable::named("b"), Literal::new(2i64));
        let c = operators::eq(Variable::named("c"), Literal::new(3i64));
        let or_ab = operators::or(vec![a, b]).unwrap();
        let expr = operators::and(vec![or_ab, c]).unwrap();
        let compiled = build(&expr).unwrap();
        assert_eq!(compiled.text, "(a = 1 OR b = 2) AND c = 3");
    }

    #[test]
    fn test_and_under_or_stays_bare() {
        let a = operators::eq(Variable::named("a"), Literal::new(1i64));
        let b = operators::eq(Variable::named("b"), Literal::new(2i64));
        let c = operators::eq(Variable::named("c"), Literal::new(3i64));
        let and_ab = operators::and(vec![a, b]).unwrap();
        let expr = operators::or(vec![and_ab, c]).unwrap();
        let compiled = build(&expr).unwrap();
        assert_eq!(compiled.text, "a = 1 AND b = 2 OR c = 3");
    }

    #[test]
    fn test_not_parenthesizes_compound_operand() {
        let inner = operators::eq(Variable::named("a"), Literal::new(1i64));
        let compiled = build(&operators::not(inner)).unwrap();
        assert_eq!(compiled.text, "NOT (a = 1)");

        let compiled = build(&operators::not(Variable::named("flag"))).unwrap();
        assert_eq!(compiled.text, "NOT flag");
    }

    #[test]
    fn test_postfix_null_checks() {
        let city = Variable::named("n").property("city");
        let compiled = build(&operators::is_null(city.clone())).unwrap();
        assert_eq!(compiled.text, "n.city IS NULL");

        let compiled = build(&operators::is_not_null(city)).unwrap();
        assert_eq!(compiled.text, "n.city IS NOT NULL");
    }

    #[test]
    fn test_arithmetic_right_associativity_parens() {
        // a - (b - c) keeps the inner application parenthesized
        let inner = operators::minus(Variable::named("b"), Variable::named("c"));
        let expr = operators::minus(Variable::named("a"), inner);
        let compiled = build(&expr).unwrap();
        assert_eq!(compiled.text, "a - (b - c)");
    }

    #[test]
    fn test_function_call_rendering() {
        let compiled = build(&functions::count(Variable::named("n"))).unwrap();
        assert_eq!(compiled.text, "count(n)");

        let fallback = functions::coalesce(vec![
            Variable::named("n").property("nickname").into_expression(),
            Literal::new("unknown").into_expression(),
        ])
        .unwrap();
        let compiled = build(&fallback).unwrap();
        assert_eq!(compiled.text, "coalesce(n.nickname, \"unknown\")");
    }

    #[test]
    fn test_list_comprehension() {
        let element = Variable::new();
        let comprehension = ListComprehension::new(element.clone(), Variable::named("items"))
            .filter(operators::gt(element.clone(), Literal::new(5i64)))
            .map(element.clone());
        let compiled = build(&comprehension).unwrap();
        assert_eq!(compiled.text, "[var0 IN items WHERE var0 > 5 | var0]");
    }

    #[test]
    fn test_parameter_rendering_and_registration() {
        let parameter = Parameter::new("The Matrix");
        let compiled = build(&operators::eq(
            Variable::named("movie").property("title"),
            parameter,
        ))
        .unwrap();
        assert_eq!(compiled.text, "movie.title = $param0");
        assert_eq!(
            compiled.parameters.get("param0"),
            Some(&cypherforge::Value::String("The Matrix".into()))
        );
    }

    #[test]
    fn test_raw_expression_merges_parameters() {
        let raw = RawExpression::new(|_env| {
            Ok(RawFragment::new("custom(this, $threshold)").parameter("threshold", 10i64))
        });
        let compiled = build(&raw).unwrap();
        assert_eq!(compiled.text, "custom(this, $threshold)");
        assert_eq!(
            compiled.parameters.get("threshold"),
            Some(&cypherforge::Value::Integer(10))
        );
    }

    #[test]
    fn test_raw_expression_can_allocate_through_environment() {
        let parameter = Parameter::new(7i64);
        let raw = RawExpression::new(move |env| {
            let name = env.parameter(&parameter)?;
            Ok(RawFragment::new(format!("boosted(${})", name)))
        });
        let compiled = build(&raw).unwrap();
        assert_eq!(compiled.text, "boosted($param0)");
        assert_eq!(compiled.parameters.len(), 1);
    }
}
