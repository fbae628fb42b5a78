//! Reference model shared by the property and fuzz suites.
//!
//! A `Vec<u8>` stands in for the expected content; every operation is
//! applied to both the model and a sequence under test, and their observable
//! results must agree.

use crate::error::{Result, SequenceError};
use crate::sequence::Sequence;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Op {
    Insert(usize, u8),
    Push(u8),
    Set(usize, u8),
    Remove(usize),
    SplitCopy(usize),
    SplitTransfer(usize),
}

impl Op {
    /// Decodes three bytes into an operation; used by the fuzz targets.
    pub(crate) fn from_bytes(kind: u8, index: u8, value: u8) -> Self {
        let index = index as usize;
        match kind % 6 {
            0 => Op::Insert(index, value),
            1 => Op::Push(value),
            2 => Op::Set(index, value),
            3 => Op::Remove(index),
            4 => Op::SplitCopy(index),
            _ => Op::SplitTransfer(index),
        }
    }
}

/// Indices mostly in range, sometimes one or two past the end.
pub(crate) fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..34usize, any::<u8>()).prop_map(|(i, v)| Op::Insert(i, v)),
        any::<u8>().prop_map(Op::Push),
        (0..34usize, any::<u8>()).prop_map(|(i, v)| Op::Set(i, v)),
        (0..34usize).prop_map(Op::Remove),
        (0..34usize).prop_map(Op::SplitCopy),
        (0..34usize).prop_map(Op::SplitTransfer),
    ]
}

/// Reads the content of any sequence through `get`.
pub(crate) fn contents<S: Sequence<u8>>(seq: &S) -> Vec<u8> {
    (0..seq.len()).map(|i| *seq.get(i).unwrap()).collect()
}

fn out_of_range(index: usize, len: usize) -> SequenceError {
    SequenceError::OutOfRange { index, len }
}

/// Applies `op` to `seq` and `model`, asserting both agree.
///
/// Split results are checked and then dropped.
pub(crate) fn apply<S: Sequence<u8>>(seq: &mut S, model: &mut Vec<u8>, op: Op) {
    let len = model.len();
    match op {
        Op::Insert(index, value) => {
            let expected: Result<()> = if index <= len {
                model.insert(index, value);
                Ok(())
            } else {
                Err(out_of_range(index, len))
            };
            assert_eq!(seq.insert(index, value), expected);
        }
        Op::Push(value) => {
            model.push(value);
            seq.push(value);
        }
        Op::Set(index, value) => {
            let expected = if index < len {
                Ok(std::mem::replace(&mut model[index], value))
            } else {
                Err(out_of_range(index, len))
            };
            assert_eq!(seq.set(index, value), expected);
        }
        Op::Remove(index) => {
            let expected = if index < len {
                Ok(model.remove(index))
            } else {
                Err(out_of_range(index, len))
            };
            assert_eq!(seq.remove(index), expected);
        }
        Op::SplitCopy(index) => match seq.split_copy(index) {
            Ok(out) => {
                assert!(index <= len);
                assert_eq!(contents(&out), model[index..].to_vec());
            }
            Err(err) => assert_eq!(err, out_of_range(index, len)),
        },
        Op::SplitTransfer(index) => match seq.split_transfer(index) {
            Ok(out) => {
                assert!(index <= len);
                assert_eq!(contents(&out), model.split_off(index));
            }
            Err(err) => assert_eq!(err, out_of_range(index, len)),
        },
    }
    assert_eq!(seq.len(), model.len());
    assert_eq!(contents(seq), *model);
}
