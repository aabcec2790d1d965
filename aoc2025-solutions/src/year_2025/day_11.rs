//! Day 11: counting data paths through a device network

use crate::utils::dp_cache::{ClosureProblem, DpCache, DpProblem, HashMapBackend, VecBackend};
use crate::utils::parse::invalid;
use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;

const OUT: &str = "out";

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 11, tags = ["graph", "dynamic-programming"])]
pub struct Solver;

/// Devices and their output links. Paths only ever lead towards `out`, so
/// the links form a DAG.
#[derive(Debug, Default)]
pub struct Network<'a> {
    ids: HashMap<&'a str, usize>,
    outputs: Vec<Vec<usize>>,
}

impl<'a> Network<'a> {
    fn intern(&mut self, name: &'a str) -> usize {
        let next = self.outputs.len();
        let id = *self.ids.entry(name).or_insert(next);
        if id == next {
            self.outputs.push(Vec::new());
        }
        id
    }

    fn id(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    fn require(&self, name: &str) -> Result<usize, SolveError> {
        self.id(name)
            .ok_or_else(|| SolveError::failed(anyhow!("no device named {:?}", name)))
    }
}

fn parse_network(input: &str) -> anyhow::Result<Network<'_>> {
    let mut network = Network::default();
    let mut listed = vec![];
    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (device, outputs) = line
            .split_once(':')
            .ok_or_else(|| anyhow!("(line {}) expected `device: outputs..`", idx + 1))?;
        let device = network.intern(device.trim());
        if listed.contains(&device) {
            bail!("(line {}) device listed twice", idx + 1);
        }
        listed.push(device);

        for output in outputs.split_whitespace() {
            let output = network.intern(output);
            network.outputs[device].push(output);
        }
    }
    Ok(network)
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_network(input).map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let network: &Network = shared;
        let start = network.require("you")?;
        let Some(out) = network.id(OUT) else {
            return Ok("0".into());
        };

        let paths = ClosureProblem::new(
            |&device: &usize| network.outputs[device].clone(),
            |&device: &usize, deps: Vec<u64>| {
                if device == out { 1 } else { deps.iter().sum() }
            },
        );
        let cache = DpCache::with_problem(VecBackend::with_capacity(network.outputs.len()), paths);
        Ok(cache.get(&start).to_string())
    }
}

/// Paths to `out` that pass every `required` device, tracked as a bitmask
/// of required devices seen so far
struct RequiredVisits<'n, 'a> {
    network: &'n Network<'a>,
    out: usize,
    required: [usize; 2],
}

impl RequiredVisits<'_, '_> {
    fn mark(&self, device: usize, seen: u8) -> u8 {
        self.required
            .iter()
            .position(|&r| r == device)
            .map_or(seen, |i| seen | 1 << i)
    }
}

impl DpProblem<(usize, u8), u64> for RequiredVisits<'_, '_> {
    fn deps(&self, &(device, seen): &(usize, u8)) -> Vec<(usize, u8)> {
        self.network.outputs[device]
            .iter()
            .map(|&next| (next, self.mark(next, seen)))
            .collect()
    }

    fn compute(&self, &(device, seen): &(usize, u8), deps: Vec<u64>) -> u64 {
        if device == self.out {
            u64::from(seen.count_ones() as usize == self.required.len())
        } else {
            deps.iter().sum()
        }
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let network: &Network = shared;
        let start = network.require("svr")?;
        let (Some(out), Some(dac), Some(fft)) =
            (network.id(OUT), network.id("dac"), network.id("fft"))
        else {
            return Ok("0".into());
        };

        let visits = RequiredVisits {
            network,
            out,
            required: [dac, fft],
        };
        let first = (start, visits.mark(start, 0));
        let cache = DpCache::with_problem(HashMapBackend::new(), visits);
        Ok(cache.get(&first).to_string())
    }
}
