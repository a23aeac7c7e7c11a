mod lines;
mod structured;

pub use self::lines::ingredient_lines;
pub use self::structured::lines_from_script;
