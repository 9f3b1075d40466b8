use super::*;
use crate::constants;

#[test]
fn advances_pc_by_one() {
    let (processor, _) = run(&program![Nop, Hlt]);

    assert_eq!(processor.register(PC), constants::LOAD_ADDRESS + 2);
    assert_eq!(processor.cycles(), 2);
}
