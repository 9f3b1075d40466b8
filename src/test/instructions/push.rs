use super::*;
use crate::constants;

#[test]
fn decrements_sp_and_writes_word() {
    let (processor, _) = run(&program![LoadImm(A, 0xBEEF), Push(A), Hlt]);

    assert_eq!(processor.register(SP), constants::INITIAL_SP - 2);
    assert_eq!(processor.memory().read_u16(constants::INITIAL_SP - 2), 0xBEEF);
}

#[test]
fn stack_grows_downward() {
    let (processor, _) = run(&program![
        LoadImm(A, 1),
        LoadImm(B, 2),
        Push(A),
        Push(B),
        Hlt,
    ]);

    assert_eq!(processor.register(SP), constants::INITIAL_SP - 4);
    assert_eq!(processor.memory().read_u16(constants::INITIAL_SP - 2), 1);
    assert_eq!(processor.memory().read_u16(constants::INITIAL_SP - 4), 2);
}
