use std::borrow::Borrow;
use std::fmt::Display;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::{Dissolve, Getters};
use eyre::Result;

use nwalign_core_rs::num::PrimUInt;

use super::op::Op;

/// A run of identical operations in the alignment
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
pub struct Step<Len: PrimUInt> {
    /// The length of the operation, e.g. the number of consequent matches or gaps.
    /// Guaranteed to be greater than zero.
    len: Len,
    /// The alignment operation
    op: Op,
}

impl<Len: PrimUInt> Step<Len> {
    pub fn new(op: Op, len: Len) -> Result<Self> {
        if len.is_zero() {
            return Err(eyre::eyre!("Step length must be greater than zero"));
        }
        Ok(Self { len, op })
    }

    /// Run-length encodes a column-by-column sequence of operations.
    /// Runs longer than the maximum value of the step size are split.
    pub fn encode(ops: impl IntoIterator<Item = Op>) -> Vec<Step<Len>> {
        let mut steps: Vec<Step<Len>> = Vec::new();
        for op in ops {
            match steps.last_mut() {
                Some(last) if last.op == op && last.len < Len::max_value() => {
                    last.len = last.len + Len::one();
                }
                _ => steps.push(Step { len: Len::one(), op }),
            }
        }
        steps
    }

    /// Expands steps back into one operation per alignment column.
    pub fn decode(steps: impl Iterator<Item: Borrow<Step<Len>>>) -> impl Iterator<Item = Op>
    where
        Len: Into<u64>,
    {
        steps.flat_map(|step| {
            let step = *step.borrow();
            std::iter::repeat_n(step.op, Into::<u64>::into(step.len) as usize)
        })
    }

    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step<Len>>>) -> String
    where
        Len: Display,
    {
        // 2 symbols is an average length of a step
        // 1 is the length of the symbol
        let hint = match steps.size_hint() {
            (_, Some(upper)) => upper * 3,
            (lower, _) => lower * 3,
        };

        let mut result = String::with_capacity(hint);
        for step in steps {
            let step = step.borrow();
            result.push_str(&step.len().to_string());
            result.push(step.op().symbol());
        }
        result
    }
}
