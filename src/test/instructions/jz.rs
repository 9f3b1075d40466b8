use super::*;

#[test]
fn taken_when_zero_set() {
    let (processor, _) = run(&program![
        LoadImm(A, 5),
        CmpImm(A, 5),      // sets Z
        Jz(0x010F),        // 0x0108
        LoadImm(A, 0xBAD), // 0x010B, skipped
        Hlt,               // 0x010F
    ]);

    assert_eq!(processor.register(A), 5);
}

#[test]
fn falls_through_when_zero_clear() {
    let (processor, _) = run(&program![
        LoadImm(A, 4),
        CmpImm(A, 5),
        Jz(0x0000),
        LoadImm(B, 1),
        Hlt,
    ]);

    assert_eq!(processor.register(B), 1);
}
