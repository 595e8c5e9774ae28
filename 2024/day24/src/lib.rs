use std::{
    collections::{HashMap, HashSet},
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    InvalidWireText(String),
    InvalidGateText(String),
    MultipleDrivers(String),
    TooManyInputBits(usize),
    TooManyOutputBits(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidWireText(s) => write!(f, "Invalid text({}) for initial wire value.", s),
            Error::InvalidGateText(s) => write!(f, "Invalid text({}) for gate.", s),
            Error::MultipleDrivers(s) => {
                write!(f, "Wire({}) is the output of more than one gate.", s)
            }
            Error::TooManyInputBits(n) => write!(f, "Too many input bits({}) to add up.", n),
            Error::TooManyOutputBits(n) => write!(f, "Too many z wires({}) to read as a number.", n),
        }
    }
}

impl error::Error for Error {}

pub const SWAP_PAIR_N: usize = 4;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Number of gate output pairs swapped in the circuit
    #[arg(long, default_value_t = SWAP_PAIR_N)]
    pub pairs: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    And,
    Or,
    Xor,
}

impl Operator {
    fn apply(&self, a: bool, b: bool) -> bool {
        match self {
            Operator::And => a && b,
            Operator::Or => a || b,
            Operator::Xor => a ^ b,
        }
    }
}

#[derive(Debug, Clone)]
struct Gate {
    inputs: [usize; 2],
    op: Operator,
    output: usize,
}

#[derive(Debug, Clone)]
pub struct Circuit {
    names: Vec<String>,
    name_inds: HashMap<String, usize>,
    initial: Vec<Option<bool>>,
    gates: Vec<Gate>,
    drivers: Vec<Option<usize>>,
    x_wires: Vec<usize>,
    y_wires: Vec<usize>,
    z_wires: Vec<usize>,
}

impl TryFrom<&str> for Circuit {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static WIRE_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^([a-z0-9]+):\s*([01])$").unwrap());
        static GATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^([a-z0-9]+) (AND|OR|XOR) ([a-z0-9]+) -> ([a-z0-9]+)$").unwrap()
        });

        let mut circuit = Circuit {
            names: Vec::new(),
            name_inds: HashMap::new(),
            initial: Vec::new(),
            gates: Vec::new(),
            drivers: Vec::new(),
            x_wires: Vec::new(),
            y_wires: Vec::new(),
            z_wires: Vec::new(),
        };
        for line in value.lines().map(|l| l.trim()).filter(|l| !l.is_empty()) {
            if line.contains("->") {
                let caps = GATE_PATTERN
                    .captures(line)
                    .ok_or_else(|| Error::InvalidGateText(line.to_string()))?;
                let op = match &caps[2] {
                    "AND" => Operator::And,
                    "OR" => Operator::Or,
                    _ => Operator::Xor,
                };
                let inputs = [circuit.wire_ind(&caps[1]), circuit.wire_ind(&caps[3])];
                let output = circuit.wire_ind(&caps[4]);
                if circuit.drivers[output].is_some() {
                    return Err(Error::MultipleDrivers(caps[4].to_string()));
                }

                circuit.drivers[output] = Some(circuit.gates.len());
                circuit.gates.push(Gate { inputs, op, output });
            } else {
                let caps = WIRE_PATTERN
                    .captures(line)
                    .ok_or_else(|| Error::InvalidWireText(line.to_string()))?;
                let ind = circuit.wire_ind(&caps[1]);
                circuit.initial[ind] = Some(&caps[2] == "1");
            }
        }

        circuit.x_wires = circuit.wires_with_prefix('x');
        circuit.y_wires = circuit.wires_with_prefix('y');
        circuit.z_wires = circuit.wires_with_prefix('z');
        if circuit.z_wires.len() > 64 {
            return Err(Error::TooManyOutputBits(circuit.z_wires.len()));
        }

        Ok(circuit)
    }
}

impl Circuit {
    fn wire_ind(&mut self, name: &str) -> usize {
        if let Some(ind) = self.name_inds.get(name) {
            return *ind;
        }

        let ind = self.names.len();
        self.names.push(name.to_string());
        self.name_inds.insert(name.to_string(), ind);
        self.initial.push(None);
        self.drivers.push(None);
        ind
    }

    fn wires_with_prefix(&self, prefix: char) -> Vec<usize> {
        let mut wires = (0..self.names.len())
            .filter(|i| self.names[*i].starts_with(prefix))
            .collect::<Vec<_>>();
        wires.sort_by(|a, b| self.names[*a].cmp(&self.names[*b]));
        wires
    }

    /// Number read from the z wires, `None` if any z wire never gets a value.
    pub fn output(&self) -> Option<u64> {
        self.simulate(self.initial.clone())
    }

    fn output_of_sum(&self, x: u64, y: u64) -> Option<u64> {
        let mut values = vec![None; self.names.len()];
        for (bit, wire) in self.x_wires.iter().enumerate() {
            values[*wire] = Some((x >> bit) & 1 == 1);
        }
        for (bit, wire) in self.y_wires.iter().enumerate() {
            values[*wire] = Some((y >> bit) & 1 == 1);
        }

        self.simulate(values)
    }

    fn simulate(&self, mut values: Vec<Option<bool>>) -> Option<u64> {
        let mut visiting = vec![false; self.names.len()];
        let mut number = 0;
        for (bit, wire) in self.z_wires.iter().enumerate() {
            if self.eval(*wire, &mut values, &mut visiting)? {
                number |= 1 << bit;
            }
        }

        Some(number)
    }

    fn eval(
        &self,
        wire: usize,
        values: &mut [Option<bool>],
        visiting: &mut [bool],
    ) -> Option<bool> {
        if let Some(value) = values[wire] {
            return Some(value);
        }

        // A wire met again while evaluating its own inputs sits in a loop.
        if visiting[wire] {
            return None;
        }
        let gate = &self.gates[self.drivers[wire]?];
        visiting[wire] = true;
        let a = self.eval(gate.inputs[0], values, visiting)?;
        let b = self.eval(gate.inputs[1], values, visiting)?;
        visiting[wire] = false;

        let value = gate.op.apply(a, b);
        values[wire] = Some(value);
        Some(value)
    }

    fn swap_outputs(&mut self, g0: usize, g1: usize) {
        let out0 = self.gates[g0].output;
        let out1 = self.gates[g1].output;
        self.gates[g0].output = out1;
        self.gates[g1].output = out0;
        self.drivers[out0] = Some(g1);
        self.drivers[out1] = Some(g0);
    }

    /// Gates the value of given wire depends on.
    fn cone(&self, wire: usize) -> HashSet<usize> {
        let mut gates = HashSet::new();
        let mut stack = vec![wire];
        while let Some(wire) = stack.pop() {
            if let Some(g) = self.drivers[wire] {
                if gates.insert(g) {
                    stack.extend(self.gates[g].inputs);
                }
            }
        }

        gates
    }

    fn input_bit_n(&self) -> usize {
        self.x_wires.len().max(self.y_wires.len())
    }

    fn sum_vectors(&self, bit: usize) -> Vec<(u64, u64)> {
        let mut vectors = vec![(0, 0)];
        if bit < self.input_bit_n() {
            let n = 1 << bit;
            vectors.extend([(n, 0), (0, n), (n, n)]);
        }
        if bit > 0 {
            let carry = 1 << (bit - 1);
            vectors.push((carry, carry));
        }

        vectors
    }

    fn adds_bit(&self, bit: usize) -> bool {
        let mask = (1u64 << (bit + 1)) - 1;
        self.sum_vectors(bit).into_iter().all(|(x, y)| {
            self.output_of_sum(x, y)
                .is_some_and(|z| z & mask == (x + y) & mask)
        })
    }

    fn adds_up_to(&self, bit: usize) -> bool {
        (0..=bit).all(|b| self.adds_bit(b))
    }

    fn adds_adversarial(&self) -> bool {
        let bit_n = self.input_bit_n();
        let all_ones = (1u64 << bit_n) - 1;
        let alternating = 0x5555_5555_5555_5555 & all_ones;
        let alternating_rev = !alternating & all_ones;
        [
            (all_ones, 1),
            (all_ones, all_ones),
            (alternating, alternating_rev),
            (alternating, alternating),
            (alternating_rev, alternating_rev),
        ]
        .into_iter()
        .all(|(x, y)| self.output_of_sum(x, y) == Some(x + y))
    }

    /// Wire names of `pair_n` swapped gate output pairs that make this circuit add x and y up.
    pub fn repair_adder(&self, pair_n: usize) -> Result<Option<String>, Error> {
        let bit_n = self.input_bit_n();
        if bit_n >= 63 || self.z_wires.len() >= 64 {
            return Err(Error::TooManyInputBits(bit_n));
        }

        let mut circuit = self.clone();
        let mut swaps = Vec::with_capacity(pair_n);
        if !circuit.search_swaps(0, pair_n, &mut swaps) {
            return Ok(None);
        }

        let mut names = swaps
            .iter()
            .flat_map(|(g0, g1)| [*g0, *g1])
            .map(|g| self.names[self.gates[g].output].as_str())
            .collect::<Vec<_>>();
        names.sort_unstable();
        Ok(Some(names.join(",")))
    }

    fn search_swaps(
        &mut self,
        from_bit: usize,
        pair_n: usize,
        swaps: &mut Vec<(usize, usize)>,
    ) -> bool {
        let Some(bit) = (from_bit..self.z_wires.len()).find(|b| !self.adds_bit(*b)) else {
            return pair_n == 0 && self.adds_adversarial();
        };
        if pair_n == 0 {
            return false;
        }

        let settled = self.z_wires[..bit]
            .iter()
            .flat_map(|w| self.cone(*w))
            .collect::<HashSet<_>>();
        let suspects = self
            .cone(self.z_wires[bit])
            .into_iter()
            .filter(|g| !settled.contains(g))
            .collect::<Vec<_>>();
        let free = (0..self.gates.len())
            .filter(|g| !settled.contains(g))
            .collect::<Vec<_>>();
        debug!(
            "Bit {} doesn't add up, trying {} x {} swap(s) with {} pair(s) left.",
            bit,
            suspects.len(),
            free.len(),
            pair_n
        );

        for &g0 in &suspects {
            for &g1 in &free {
                if g0 == g1 || (suspects.contains(&g1) && g1 < g0) {
                    continue;
                }

                self.swap_outputs(g0, g1);
                if self.adds_up_to(bit) {
                    swaps.push((g0, g1));
                    if self.search_swaps(bit + 1, pair_n - 1, swaps) {
                        return true;
                    }
                    swaps.pop();
                }
                self.swap_outputs(g0, g1);
            }
        }

        false
    }
}

pub fn read_circuit<P: AsRef<Path>>(path: P) -> Result<Circuit> {
    let text = common::input::read_text(&path)?;
    Circuit::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse circuit in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<Option<u64>> {
    Ok(read_circuit(path)?.output())
}

pub fn part2<P: AsRef<Path>>(path: P, pair_n: usize) -> Result<Option<String>> {
    Ok(read_circuit(path)?.repair_adder(pair_n)?)
}
