//! Predefined shape catalog
//!
//! Named footprints the item authoring layer refers to: the classic
//! tetromino pieces plus the silhouettes the starter items use. Every entry
//! is built from the generators, so each is valid by construction.

use crate::core::error::ShapeError;
use crate::shape::generators::{Corner, Facing};
use crate::shape::Shape;

macro_rules! catalog {
    ($( $(#[$doc:meta])* $name:ident => $build:expr; )*) => {
        $(
            $(#[$doc])*
            pub fn $name() -> Shape {
                let result: Result<Shape, ShapeError> = $build;
                result.expect(concat!("predefined shape `", stringify!($name), "` is valid"))
            }
        )*

        /// Every predefined shape with its catalog name
        pub fn all() -> Vec<(&'static str, Shape)> {
            vec![$( (stringify!($name), $name()) ),*]
        }
    };
}

catalog! {
    // Tetromino pieces
    tetromino_i => Shape::rectangle(1, 4);
    tetromino_o => Shape::rectangle(2, 2);
    tetromino_t => Shape::t_shape(3, 3, Facing::Down);
    tetromino_s => Shape::from_text_pattern(&["XX.", ".XX"]);
    tetromino_z => Shape::from_text_pattern(&[".XX", "XX."]);
    tetromino_j => Shape::l_shape(3, Corner::BottomLeft);
    tetromino_l => Shape::l_shape(3, Corner::BottomRight);

    // Weapon silhouettes
    sword => Shape::rectangle(1, 3);
    dagger => Shape::rectangle(1, 1);
    bow => Shape::u_shape(3, 3, Facing::Up);
    staff => Shape::t_shape(3, 3, Facing::Up);
    axe => Shape::l_shape(3, Corner::TopLeft);
    hammer => Shape::t_shape(2, 3, Facing::Up);

    // Armor silhouettes
    helmet => Shape::u_shape(2, 3, Facing::Down);
    chestplate => Shape::rectangle(2, 3);
    shield => Shape::rectangle(2, 2);

    // Accessories
    ring => Shape::from_text_pattern(&["X"]);
    amulet => Shape::from_text_pattern(&["X", "X"]);
    belt => Shape::from_text_pattern(&["XXXX"]);

    // Special pieces
    cross => Shape::plus_shape(1);
    small_diamond => Shape::diamond(3);
    small_frame => Shape::frame(4, 4, 1);

    // Complex silhouettes
    boot => Shape::from_text_pattern(&["XX", "XX", "X."]);
    crown => Shape::from_text_pattern(&["X.X", "XXX"]);
    key => Shape::from_text_pattern(&["XX", ".X", ".X"]);
    potion => Shape::from_text_pattern(&[".X.", "XXX"]);

    // Large pieces
    tower => Shape::from_text_pattern(&["X", "X", "X", "X", "X"]);
    castle => Shape::from_text_pattern(&["X.X", "XXX", "XXX"]);
    scroll => Shape::from_text_pattern(&["XXXX", "XXXX"]);
}
