use std::{
    collections::{HashMap, VecDeque},
    error,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InvalidModuleText(String),
    NoBroadcaster,
    NoSingleFeeder(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidModuleText(s) => write!(f, "Invalid text({}) for module.", s),
            Error::NoBroadcaster => write!(f, "Can't find broadcaster module."),
            Error::NoSingleFeeder(s) => write!(
                f,
                "Module({}) should be fed by exactly one conjunction module.",
                s
            ),
        }
    }
}

impl error::Error for Error {}

pub const PRESS_N: usize = 1000;
const BROADCASTER: &str = "broadcaster";
const FINAL_MACHINE: &str = "rx";

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone)]
enum ModuleKind {
    Broadcast,
    FlipFlop(bool),
    // Last pulse remembered from each input module.
    Conjunction(HashMap<usize, bool>),
    Sink,
}

#[derive(Debug, Clone)]
struct Module {
    kind: ModuleKind,
    outputs: Vec<usize>,
}

impl Module {
    /// Pulse sent to all outputs after receiving given pulse, `None` if nothing sent.
    fn receive(&mut self, from: usize, high: bool) -> Option<bool> {
        match &mut self.kind {
            ModuleKind::Broadcast => Some(high),
            ModuleKind::FlipFlop(on) => {
                if high {
                    None
                } else {
                    *on = !*on;
                    Some(*on)
                }
            }
            ModuleKind::Conjunction(memory) => {
                memory.insert(from, high);
                Some(!memory.values().all(|h| *h))
            }
            ModuleKind::Sink => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Machine {
    names: Vec<String>,
    modules: Vec<Module>,
    broadcaster: usize,
}

impl TryFrom<&str> for Machine {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut names: Vec<String> = Vec::new();
        let mut name_inds = HashMap::new();
        let mut ind_of = |name: &str, names: &mut Vec<String>| -> usize {
            *name_inds.entry(name.to_string()).or_insert_with(|| {
                names.push(name.to_string());
                names.len() - 1
            })
        };

        let mut specs = Vec::new();
        for line in value.lines().map(|l| l.trim()).filter(|l| !l.is_empty()) {
            let (module_text, outputs_text) = line
                .split_once("->")
                .ok_or_else(|| Error::InvalidModuleText(line.to_string()))?;
            let module_text = module_text.trim();
            let (kind, name) = if let Some(name) = module_text.strip_prefix('%') {
                (ModuleKind::FlipFlop(false), name)
            } else if let Some(name) = module_text.strip_prefix('&') {
                (ModuleKind::Conjunction(HashMap::new()), name)
            } else if module_text == BROADCASTER {
                (ModuleKind::Broadcast, module_text)
            } else {
                return Err(Error::InvalidModuleText(line.to_string()));
            };

            let ind = ind_of(name, &mut names);
            let outputs = outputs_text
                .split(',')
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(|s| ind_of(s, &mut names))
                .collect::<Vec<_>>();
            specs.push((ind, kind, outputs));
        }

        let mut modules = vec![
            Module {
                kind: ModuleKind::Sink,
                outputs: Vec::new(),
            };
            names.len()
        ];
        for (ind, kind, outputs) in specs {
            modules[ind] = Module { kind, outputs };
        }

        // Conjunctions start remembering a low pulse from every input.
        for from in 0..modules.len() {
            for to in modules[from].outputs.clone() {
                if let ModuleKind::Conjunction(memory) = &mut modules[to].kind {
                    memory.insert(from, false);
                }
            }
        }

        let broadcaster = names
            .iter()
            .position(|n| n == BROADCASTER)
            .ok_or(Error::NoBroadcaster)?;

        Ok(Self {
            names,
            modules,
            broadcaster,
        })
    }
}

impl Machine {
    /// Push the button once, calling `on_pulse(from, to, high)` for every pulse sent.
    fn press<F>(&mut self, mut on_pulse: F)
    where
        F: FnMut(usize, usize, bool),
    {
        // The button sends a low pulse to the broadcaster.
        let mut pulses = VecDeque::from([(self.broadcaster, self.broadcaster, false)]);
        while let Some((from, to, high)) = pulses.pop_front() {
            on_pulse(from, to, high);
            if let Some(out_high) = self.modules[to].receive(from, high) {
                for next in &self.modules[to].outputs {
                    pulses.push_back((to, *next, out_high));
                }
            }
        }
    }

    pub fn pulse_product(&mut self, press_n: usize) -> usize {
        let (mut low_n, mut high_n) = (0, 0);
        for _ in 0..press_n {
            self.press(|_, _, high| {
                if high {
                    high_n += 1;
                } else {
                    low_n += 1;
                }
            });
        }

        low_n * high_n
    }

    /// Presses needed to send a low pulse to rx, assuming every input of its feeder cycles.
    pub fn presses_to_final_machine(&mut self) -> Result<Option<usize>, Error> {
        let Some(rx) = self.names.iter().position(|n| n == FINAL_MACHINE) else {
            return Ok(None);
        };
        let feeders = (0..self.modules.len())
            .filter(|i| self.modules[*i].outputs.contains(&rx))
            .collect::<Vec<_>>();
        let [feeder] = feeders[..] else {
            return Err(Error::NoSingleFeeder(FINAL_MACHINE.to_string()));
        };
        let ModuleKind::Conjunction(memory) = &self.modules[feeder].kind else {
            return Err(Error::NoSingleFeeder(FINAL_MACHINE.to_string()));
        };

        let mut first_highs: HashMap<usize, Option<usize>> =
            memory.keys().map(|input| (*input, None)).collect();
        let mut press_ind = 0;
        // Inputs cycling slower than this are out of reach.
        let press_limit = 1 << 20;
        while first_highs.values().any(|p| p.is_none()) {
            press_ind += 1;
            if press_ind > press_limit {
                return Ok(None);
            }

            self.press(|from, to, high| {
                if to == feeder && high {
                    if let Some(first) = first_highs.get_mut(&from) {
                        first.get_or_insert(press_ind);
                    }
                }
            });
        }

        Ok(Some(common::math::lcm_all(first_highs.values().flatten().copied())))
    }
}

pub fn read_machine<P: AsRef<Path>>(path: P) -> Result<Machine> {
    let text = common::input::read_text(&path)?;
    Machine::try_from(text.as_str()).with_context(|| {
        format!(
            "Failed to parse module configuration in given file({}).",
            path.as_ref().display()
        )
    })
}

pub fn part1<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(read_machine(path)?.pulse_product(PRESS_N))
}

pub fn part2<P: AsRef<Path>>(path: P) -> Result<Option<usize>> {
    Ok(read_machine(path)?.presses_to_final_machine()?)
}
