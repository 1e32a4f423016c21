// Domain layer: commands, loop state and the fixed console text. No I/O beyond std::io::Write.

pub mod model;
pub mod text;
