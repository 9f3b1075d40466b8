use super::*;

#[test]
fn bitwise_and() {
    let (processor, _) = run(&program![
        LoadImm(A, 0xF0F0),
        LoadImm(B, 0xFF00),
        And(A, B),
        Hlt,
    ]);

    assert_eq!(processor.register(A), 0xF000);
    assert!(processor.flags().negative());
}

#[test]
fn clears_carry_from_previous_operation() {
    let (processor, _) = run(&program![
        LoadImm(A, 0),
        LoadImm(B, 1),
        Sub(A, B), // sets C
        And(A, B),
        Hlt,
    ]);

    assert_eq!(processor.register(A), 1);
    assert!(!processor.flags().carry());
    assert!(!processor.flags().overflow());
}
