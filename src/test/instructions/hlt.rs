use super::*;

#[test]
fn stops_the_machine() {
    let (processor, _) = run(&program![Hlt, Inc(A)]);

    assert!(processor.halted());
    assert!(!processor.running());
    assert_eq!(processor.register(A), 0);
    assert_eq!(processor.cycles(), 1);
}

#[test]
fn stepping_a_halted_machine_is_a_no_op() {
    let (mut processor, _) = run(&program![Hlt]);
    let pc = processor.register(PC);

    let mut host = BufferHost::new();
    assert_eq!(processor.step(&mut host), Ok(()));
    assert_eq!(processor.register(PC), pc);
    assert_eq!(processor.cycles(), 1);
}
