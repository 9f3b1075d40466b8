use super::*;
use crate::constants;

#[test]
fn restores_sp_and_value() {
    let (processor, _) = run(&program![LoadImm(A, 0x1234), Push(A), Pop(B), Hlt]);

    assert_eq!(processor.register(B), 0x1234);
    assert_eq!(processor.register(SP), constants::INITIAL_SP);
}

#[test]
fn pops_in_reverse_order() {
    let (processor, _) = run(&program![
        LoadImm(A, 10),
        LoadImm(B, 20),
        Push(A),
        Push(B),
        Pop(C),
        Pop(D),
        Hlt,
    ]);

    assert_eq!(processor.register(C), 20);
    assert_eq!(processor.register(D), 10);
}
