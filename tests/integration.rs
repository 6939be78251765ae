//! End-to-end tests for digit-mirror.
//!
//! These tests drive the public API from digit values through glyph lookup,
//! number construction and field composition to rendered text.

use digit_mirror::config::MirrorConfig;
use digit_mirror::input::parse_digits;
use digit_mirror::render::{RenderConfig, render, render_grid, render_to_terminal};
use digit_mirror::{
    Axis, DigitGlyph, ErrorKind, Grid, MatrixEntity, Mirror, Number, Quadrant, Symbol,
    build_coordinate_field, build_number, concat, concat_all, digit_glyph_for, invert_horizontal,
    invert_vertical,
};

fn glyphs(values: &[u8]) -> Vec<DigitGlyph> {
    values.iter().map(|&v| digit_glyph_for(v).unwrap()).collect()
}

#[test]
fn end_to_end_number_to_full_field() {
    let config = MirrorConfig::default();
    let digits = parse_digits("19", &config).unwrap();
    assert_eq!(digits, [0, 0, 1, 9]);

    let number = build_number(&glyphs(&digits)).unwrap();
    assert_eq!((number.rows(), number.cols()), (5, 16));

    let mut field = build_coordinate_field(number.clone()).unwrap();
    field.fill_horizontal_mirror().unwrap();
    field.fill_vertical_mirror().unwrap();
    field.fill_both_mirror().unwrap();
    assert!(field.is_complete());

    let lines = render_grid(field.grid());
    assert_eq!(lines.len(), 11);
    assert!(lines.iter().all(|l| l.chars().count() == 33));
    assert_eq!(lines[5], "-".repeat(33));

    // Each row of the top half reads as the number, the axis, then the
    // number mirrored.
    let number_lines = render(&number);
    for (row, line) in lines.iter().take(5).enumerate() {
        let mirrored: String = number_lines[row].chars().rev().collect();
        assert_eq!(*line, format!("{}|{}", number_lines[row], mirrored));
    }

    // The bottom half is the top half upside down.
    for row in 0..5 {
        assert_eq!(lines[6 + row], lines[4 - row]);
    }
}

#[test]
fn single_digit_field_matches_documented_layout() {
    let number = build_number(&glyphs(&[1])).unwrap();
    let mut field = build_coordinate_field(number).unwrap();

    assert_eq!(
        render_grid(field.grid()),
        [
            "    |    ",
            "   ||    ",
            "    |    ",
            "   ||    ",
            "    |    ",
            "---------",
            "    |    ",
            "    |    ",
            "    |    ",
            "    |    ",
            "    |    ",
        ]
    );

    field.fill_horizontal_mirror().unwrap();
    let once = field.grid().clone();
    field.fill_horizontal_mirror().unwrap();
    assert_eq!(field.grid(), &once);
    assert_eq!(
        render_grid(&once)[..5],
        [
            "    |    ",
            "   |||   ",
            "    |    ",
            "   |||   ",
            "    |    ",
        ]
    );
}

#[test]
fn fills_read_the_original_number() {
    let number = Number::from_digits(&[2, 5]).unwrap();
    let mut field = build_coordinate_field(number.clone()).unwrap();

    // Filling both first must not feed later fills.
    field.fill_both_mirror().unwrap();
    field.fill_horizontal_mirror().unwrap();
    field.fill_vertical_mirror().unwrap();

    assert_eq!(
        &field.quadrant(Quadrant::TopRight).unwrap(),
        invert_horizontal(&number).unwrap().grid()
    );
    assert_eq!(
        &field.quadrant(Quadrant::BottomLeft).unwrap(),
        invert_vertical(&number).unwrap().grid()
    );
    assert_eq!(
        &field.quadrant(Quadrant::BottomRight).unwrap(),
        invert_horizontal(&invert_vertical(&number).unwrap())
            .unwrap()
            .grid()
    );
}

#[test]
fn transformations_preserve_entity_type() {
    let seven = digit_glyph_for(7).unwrap();
    let flipped: DigitGlyph = invert_vertical(&seven).unwrap();
    assert_eq!(flipped.rows(), 5);

    let pair = Number::from_digits(&[3]).unwrap();
    let joined: Number = concat(&pair, &pair, Axis::Vertical).unwrap();
    assert_eq!((joined.rows(), joined.cols()), (10, 4));
}

#[test]
fn involution_holds_for_every_digit() {
    for value in 0..10 {
        let g = digit_glyph_for(value).unwrap();
        assert_eq!(invert_horizontal(&invert_horizontal(&g).unwrap()).unwrap(), g);
        assert_eq!(invert_vertical(&invert_vertical(&g).unwrap()).unwrap(), g);
    }
}

#[test]
fn concat_all_matches_manual_fold_over_numbers() {
    let parts: Vec<Number> = [0u8, 4, 8]
        .iter()
        .map(|&d| Number::from_digits(&[d]).unwrap())
        .collect();
    let folded = concat_all(&parts, Axis::Horizontal).unwrap();
    let manual = concat(
        &concat(&parts[0], &parts[1], Axis::Horizontal).unwrap(),
        &parts[2],
        Axis::Horizontal,
    )
    .unwrap();
    assert_eq!(folded, manual);
    assert_eq!(folded, Number::from_digits(&[0, 4, 8]).unwrap());
}

#[test]
fn error_taxonomy_at_the_boundary() {
    assert_eq!(build_number(&[]).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(
        digit_glyph_for(10).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );

    let mut glyph = digit_glyph_for(8).unwrap();
    assert_eq!(
        glyph.set_cell(5, 0, Symbol::VBar).unwrap_err().kind(),
        ErrorKind::IndexOutOfRange
    );
    assert_eq!(
        Number::from_grid(Grid::new(5, 0)).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn colored_render_keeps_row_count() {
    let number = Number::from_digits(&[6]).unwrap();
    let mut field = build_coordinate_field(number).unwrap();
    field.fill(Mirror::Both).unwrap();

    let plain = render_to_terminal(field.grid(), &RenderConfig { color: false });
    let colored = render_to_terminal(field.grid(), &RenderConfig { color: true });
    assert_eq!(plain.lines().count(), colored.lines().count());
    assert_ne!(plain, colored);
}

#[test]
fn concat_law_holds_for_digit_glyphs() {
    let one = digit_glyph_for(1).unwrap();
    let zero = digit_glyph_for(0).unwrap();

    let wide: DigitGlyph = concat(&one, &zero, Axis::Horizontal).unwrap();
    assert_eq!((wide.rows(), wide.cols()), (5, 8));
    let tall: DigitGlyph = concat(&one, &zero, Axis::Vertical).unwrap();
    assert_eq!((tall.rows(), tall.cols()), (10, 4));

    let folded: DigitGlyph = concat_all(&glyphs(&[1, 0]), Axis::Horizontal).unwrap();
    assert_eq!(folded.grid(), build_number(&glyphs(&[1, 0])).unwrap().grid());
}
