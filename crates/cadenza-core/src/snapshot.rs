//! Immutable machine configuration and its between-segment swap.

use crate::{axis::AxisSet, error::Result, mapper::MotorMapper, motor::MotorSet};
use parking_lot::RwLock;
use std::sync::Arc;

/// Axis and motor configuration validated for conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct MachineSnapshot<const A: usize, const M: usize> {
    axes: AxisSet<A>,
    mapper: MotorMapper<A, M>,
}

impl<const A: usize, const M: usize> MachineSnapshot<A, M> {
    pub fn new(axes: AxisSet<A>, motors: MotorSet<M>) -> Result<Self> {
        let mapper = MotorMapper::new(motors)?;
        Ok(Self { axes, mapper })
    }

    pub fn axes(&self) -> &AxisSet<A> {
        &self.axes
    }

    pub fn motors(&self) -> &MotorSet<M> {
        self.mapper.motors()
    }

    pub fn mapper(&self) -> &MotorMapper<A, M> {
        &self.mapper
    }
}

/// Single-writer, many-reader holder of the active [`MachineSnapshot`].
///
/// Readers take an `Arc` to the current snapshot at the start of a
/// segment and keep using it until that segment is converted; a
/// concurrent [`SharedMachine::swap`] only affects later loads.
#[derive(Debug)]
pub struct SharedMachine<const A: usize, const M: usize> {
    slot: RwLock<Slot<A, M>>,
}

#[derive(Debug)]
struct Slot<const A: usize, const M: usize> {
    snapshot: Arc<MachineSnapshot<A, M>>,
    generation: u64,
}

impl<const A: usize, const M: usize> SharedMachine<A, M> {
    pub fn new(snapshot: MachineSnapshot<A, M>) -> Self {
        Self {
            slot: RwLock::new(Slot {
                snapshot: Arc::new(snapshot),
                generation: 0,
            }),
        }
    }

    pub fn load(&self) -> Arc<MachineSnapshot<A, M>> {
        self.slot.read().snapshot.clone()
    }

    /// Number of swaps performed so far.
    pub fn generation(&self) -> u64 {
        self.slot.read().generation
    }

    /// Install `next` and return the snapshot it replaced.
    pub fn swap(&self, next: MachineSnapshot<A, M>) -> Arc<MachineSnapshot<A, M>> {
        let mut slot = self.slot.write();
        let previous = std::mem::replace(&mut slot.snapshot, Arc::new(next));
        slot.generation += 1;
        tracing::info!(generation = slot.generation, "swapped machine configuration");
        previous
    }
}
