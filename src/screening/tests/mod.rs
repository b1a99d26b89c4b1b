mod common;
mod invariants;
