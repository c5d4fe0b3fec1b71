//! Python bindings for the babylon-tower puzzle engine.
//!
//! # Quick Start
//!
//! ```python
//! import babylon_tower as bt
//!
//! game = bt.BabylonTower(num_disks=3, num_rods=3)
//! game.move(0, 2)
//! print(game.get_state())        # [[3, 2], [], [1]]
//! print(game.get_possible_moves())
//!
//! session = bt.Session(num_disks=4, num_rods=3, seed=7)
//! session.press(0)               # ("selected", False)
//! session.press(1)               # ("moved", False)
//! ```

use pyo3::prelude::*;

mod py_engine;
mod py_session;

pub use py_engine::*;
pub use py_session::*;

/// babylon_tower: generalized Tower of Hanoi.
#[pymodule]
fn babylon_tower(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBabylonTower>()?;
    m.add_class::<PySession>()?;
    Ok(())
}
