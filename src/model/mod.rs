pub use planner_core::GrowthLogic;
pub mod board {
    pub use planner_core::board::*;
}
pub mod catalog {
    pub use planner_core::catalog::*;
}
pub mod config {
    pub use planner_core::config::*;
}
pub mod growth {
    pub use planner_core::growth::*;
}
pub mod history {
    pub use planner_core::history::*;
}
pub mod placement {
    pub use planner_core::placement::*;
}
pub mod score {
    pub use planner_core::score::*;
}
pub mod spawn {
    pub use planner_core::spawn::*;
}
pub mod tick {
    pub use planner_core::tick::*;
}
pub mod codec {
    pub use planner_io::codec::*;
}

pub mod state {
    pub use planner_data::*;
}

pub mod session;
