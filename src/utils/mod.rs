pub mod cycle_counter;

pub use cycle_counter::CycleCounter;
