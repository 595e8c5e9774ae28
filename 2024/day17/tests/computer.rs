use aoc2024_day17::{Computer, Registers};

fn run(a: u64, b: u64, c: u64, program: &[u8]) -> (Registers, Vec<u8>) {
    let mut computer = Computer::new(Registers { a, b, c }, program.to_vec());
    let output = computer.run().unwrap();
    (computer.registers(), output)
}

#[test]
fn bst_sets_b_from_c() {
    let (regs, _) = run(0, 0, 9, &[2, 6]);
    assert_eq!(regs.b, 1);
}

#[test]
fn out_prints_literal_operands() {
    let (_, output) = run(10, 0, 0, &[5, 0, 5, 1, 5, 4]);
    assert_eq!(output, vec![0, 1, 2]);
}

#[test]
fn loop_shifts_a_down_to_zero() {
    let (regs, output) = run(2024, 0, 0, &[0, 1, 5, 4, 3, 0]);
    assert_eq!(output, vec![4, 2, 5, 6, 7, 7, 7, 7, 3, 1, 0]);
    assert_eq!(regs.a, 0);
}

#[test]
fn bxl_xors_b_with_literal() {
    let (regs, _) = run(0, 29, 0, &[1, 7]);
    assert_eq!(regs.b, 26);
}

#[test]
fn bxc_xors_b_with_c() {
    let (regs, _) = run(0, 2024, 43690, &[4, 0]);
    assert_eq!(regs.b, 44354);
}

#[test]
fn invalid_combo_operand_is_error() {
    let mut computer = Computer::new(Registers::default(), vec![5, 7]);
    assert!(computer.run().is_err());
}
