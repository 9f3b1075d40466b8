use super::*;

#[test]
fn equal_immediate() {
    let (processor, _) = run(&program![LoadImm(A, 5), CmpImm(A, 5), Hlt]);

    assert_eq!(processor.register(A), 5);
    assert!(processor.flags().zero());
}

#[test]
fn flags_match_register_form() {
    let (immediate, _) = run(&program![LoadImm(A, 3), CmpImm(A, 7), Hlt]);
    let (register, _) = run(&program![LoadImm(A, 3), LoadImm(B, 7), Cmp(A, B), Hlt]);

    assert_eq!(immediate.flags(), register.flags());
}
