//! Day 10: configuring factory machines with as few button presses as possible

use crate::utils::linear_system::LinearSystem;
use crate::utils::parse::{parse_lines, separated};
use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Subsets of at most this many buttons are enumerated outright
const MAX_BUTTONS: usize = 24;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 10, tags = ["linear-algebra", "search"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    /// Bit `i` set when light `i` must end up on
    lights: u64,
    /// Lights, and the joltage counters sharing their index, wired to each button
    buttons: Vec<Vec<usize>>,
    joltage: Vec<u64>,
}

impl Machine {
    fn parse(line: &str) -> anyhow::Result<Self> {
        let mut fields = line.split_whitespace();

        let diagram = fields
            .next()
            .and_then(|f| f.strip_prefix('[')?.strip_suffix(']'))
            .ok_or_else(|| anyhow!("expected a `[.#]` light diagram first"))?;
        if diagram.len() > u64::BITS as usize {
            bail!("at most {} lights are supported", u64::BITS);
        }
        let mut lights = 0;
        for (i, b) in diagram.bytes().enumerate() {
            match b {
                b'#' => lights |= 1 << i,
                b'.' => {}
                _ => bail!("unexpected {:?} in light diagram", b as char),
            }
        }

        let mut buttons = Vec::new();
        let mut joltage = None;
        for field in fields {
            if let Some(wiring) = field.strip_prefix('(').and_then(|f| f.strip_suffix(')')) {
                if joltage.is_some() {
                    bail!("button {} after the joltage requirements", field);
                }
                let wiring: Vec<usize> =
                    separated(wiring, ',').with_context(|| format!("button {}", field))?;
                if let Some(&light) = wiring.iter().find(|&&l| l >= diagram.len()) {
                    bail!("button {} wires light {} of {}", field, light, diagram.len());
                }
                buttons.push(wiring);
            } else if let Some(targets) = field.strip_prefix('{').and_then(|f| f.strip_suffix('}')) {
                let targets: Vec<u64> = separated(targets, ',').context("joltage requirements")?;
                if targets.len() != diagram.len() {
                    bail!("{} joltage values for {} lights", targets.len(), diagram.len());
                }
                joltage = Some(targets);
            } else {
                bail!("unexpected field {:?}", field);
            }
        }

        if buttons.len() > MAX_BUTTONS {
            bail!("{} buttons, at most {} are supported", buttons.len(), MAX_BUTTONS);
        }
        let joltage = joltage.ok_or_else(|| anyhow!("missing `{{..}}` joltage requirements"))?;
        Ok(Machine {
            lights,
            buttons,
            joltage,
        })
    }

    /// Fewest presses toggling exactly the lit pattern; pressing a button
    /// twice undoes it, so every button is pressed at most once.
    fn fewest_toggles(&self) -> Option<u32> {
        let masks: Vec<u64> = self
            .buttons
            .iter()
            .map(|wiring| wiring.iter().fold(0, |m, &l| m | 1 << l))
            .collect();

        (0u32..1 << masks.len())
            .filter(|subset| {
                let toggled = masks
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| subset >> i & 1 == 1)
                    .fold(0, |acc, (_, m)| acc ^ m);
                toggled == self.lights
            })
            .map(u32::count_ones)
            .min()
    }

    /// Fewest presses raising every counter to its joltage exactly.
    fn fewest_increments(&self) -> Option<u64> {
        LinearSystem::from_incidence(&self.buttons, &self.joltage).min_total()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Machine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, Machine::parse)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0;
        for (idx, machine) in shared.iter().enumerate() {
            total += machine.fewest_toggles().ok_or_else(|| {
                SolveError::failed(anyhow!("machine {} cannot light its pattern", idx + 1))
            })?;
        }
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0;
        for (idx, machine) in shared.iter().enumerate() {
            total += machine.fewest_increments().ok_or_else(|| {
                SolveError::failed(anyhow!("machine {} cannot reach its joltage", idx + 1))
            })?;
        }
        Ok(total.to_string())
    }
}
