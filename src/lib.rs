pub mod analysis;
pub mod camera;
pub mod cli;
pub mod ctx;
pub mod exercise;
pub mod io;
pub mod kinematics;
pub mod math {
    pub mod stats;
}
pub mod phases;
pub mod pipeline;
pub mod pose;
pub mod schema {
    pub mod v1;
}
pub mod series;
