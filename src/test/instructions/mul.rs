use super::*;

#[test]
fn product() {
    let (processor, _) = run(&program![LoadImm(A, 3), LoadImm(B, 4), Mul(A, B), Hlt]);

    assert_eq!(processor.register(A), 12);
    assert_eq!(processor.flags(), Flags::empty());
}

#[test]
fn overflowing_product_sets_carry() {
    let (processor, _) = run(&program![
        LoadImm(A, 0x4000),
        LoadImm(B, 4),
        Mul(A, B),
        Hlt,
    ]);

    // 0x4000 * 4 = 0x10000; only the low 16 bits are written back.
    assert_eq!(processor.register(A), 0);
    assert!(processor.flags().carry());
    assert!(processor.flags().zero());
    assert!(!processor.flags().overflow());
}

#[test]
fn zero_factor() {
    let (processor, _) = run(&program![
        LoadImm(A, 0xFFFF),
        LoadImm(B, 0),
        Mul(A, B),
        Hlt,
    ]);

    assert_eq!(processor.register(A), 0);
    assert!(processor.flags().zero());
    assert!(!processor.flags().carry());
}
