//! Simulation dynamics: contact resolution and time integration.

pub mod integrator;
pub mod solver;

pub use integrator::Integrator;
pub use solver::ContactSolver;
