use super::*;

#[test]
fn difference() {
    let (processor, _) = run(&program![
        LoadImm(A, 5678),
        LoadImm(B, 1234),
        Sub(A, B),
        Hlt,
    ]);

    assert_eq!(processor.register(A), 4444);
    assert_eq!(processor.flags(), Flags::empty());
}

#[test]
fn borrow_sets_carry_and_negative() {
    let (processor, _) = run(&program![LoadImm(A, 0), LoadImm(B, 1), Sub(A, B), Hlt]);

    assert_eq!(processor.register(A), 0xFFFF);
    assert!(processor.flags().carry());
    assert!(processor.flags().negative());
    assert!(!processor.flags().zero());
    assert!(!processor.flags().overflow());
}

#[test]
fn signed_overflow() {
    let (processor, _) = run(&program![
        LoadImm(A, 0x8000),
        LoadImm(B, 1),
        Sub(A, B),
        Hlt,
    ]);

    assert_eq!(processor.register(A), 0x7FFF);
    assert!(processor.flags().overflow());
    assert!(!processor.flags().negative());
    assert!(!processor.flags().carry());
}
