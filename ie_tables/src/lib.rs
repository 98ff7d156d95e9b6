pub mod formatio;
pub mod formation;
pub mod game;
pub mod geometry;
pub mod two_da;

pub use formatio::{
    FormationDiff, FormationRow, build_formation_table, diff_formation_tables, read_formation_rows,
    write_formation_table,
};
pub use formation::{Formation, FormationKind, SLOT_COUNT, corrected_position};
pub use game::{Game, UnknownGame};
pub use geometry::{Offset, truncate_toward_zero};
pub use two_da::{TwoDaRow, TwoDaTable};
