use super::*;

#[test]
fn can_keep_order_in_parallel_collect() {
    let source = (0..100).collect::<Vec<_>>();

    let result = parallel_collect(&source, |value| value * 2);

    assert_eq!(result, (0..100).map(|value| value * 2).collect::<Vec<_>>());
}

#[test]
fn can_keep_order_in_parallel_into_collect() {
    let source = vec!["a".to_string(), "b".to_string(), "c".to_string()];

    let result = parallel_into_collect(source, |value| value.to_uppercase());

    assert_eq!(result, vec!["A", "B", "C"]);
}
