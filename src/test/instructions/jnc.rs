use super::*;

#[test]
fn taken_without_carry() {
    let (processor, _) = run(&program![
        LoadImm(A, 2),
        CmpImm(A, 1),
        Jnc(0x010F),       // 0x0108
        LoadImm(A, 0xBAD), // skipped
        Hlt,               // 0x010F
    ]);

    assert_eq!(processor.register(A), 2);
}

#[test]
fn falls_through_on_borrow() {
    let (processor, _) = run(&program![
        LoadImm(A, 0),
        CmpImm(A, 1),
        Jnc(0x0000),
        LoadImm(B, 1),
        Hlt,
    ]);

    assert_eq!(processor.register(B), 1);
}
