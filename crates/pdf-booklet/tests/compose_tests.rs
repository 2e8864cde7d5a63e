use image::{Rgb, RgbImage};
use lopdf::{Document, Object};
use pdf_booklet::*;

/// Fake rasterized pages with distinct widths so placements can be told apart
/// by the embedded XObject dimensions.
fn fake_pages(count: usize) -> Vec<RgbImage> {
    (0..count)
        .map(|i| RgbImage::from_pixel(100 + i as u32, 140, Rgb([i as u8, 0, 0])))
        .collect()
}

fn folio_map() -> SignatureMap {
    SignatureMap::new(SignatureSize::S4, PaperFormat::A6, PaperFormat::A4)
}

fn page_id(doc: &Document) -> (u32, u16) {
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1, "a sheet side is a single page");
    *pages.values().next().unwrap()
}

/// Width entry of the image XObject placed in the given slot.
fn slot_image_width(doc: &Document, slot: usize) -> i64 {
    let page = doc.get_dictionary(page_id(doc)).unwrap();
    let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
    let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
    let name = format!("P{}", slot);
    let id = xobjects.get(name.as_bytes()).unwrap().as_reference().unwrap();
    let stream = doc.get_object(id).unwrap().as_stream().unwrap();
    stream.dict.get(b"Width").unwrap().as_i64().unwrap()
}

fn content_string(doc: &Document) -> String {
    String::from_utf8(doc.get_page_content(page_id(doc)).unwrap()).unwrap()
}

#[test]
fn front_side_follows_canonical_order() {
    let pages = fake_pages(4);
    let blank = compose::blank_filler(&pages[0]);
    let map = folio_map();
    let group = batch_pages(4, 4).unwrap()[0];

    let doc = compose_sheet(
        &pages,
        &blank,
        &group,
        &map,
        SheetSide::Front,
        Orientation::Portrait,
    )
    .unwrap();

    // front_order = [4, 1]: slot 0 holds page 4 (width 103), slot 1 page 1
    assert_eq!(slot_image_width(&doc, 0), 103);
    assert_eq!(slot_image_width(&doc, 1), 100);
}

#[test]
fn back_side_follows_canonical_order() {
    let pages = fake_pages(4);
    let blank = compose::blank_filler(&pages[0]);
    let map = folio_map();
    let group = batch_pages(4, 4).unwrap()[0];

    let doc = compose_sheet(
        &pages,
        &blank,
        &group,
        &map,
        SheetSide::Back,
        Orientation::Portrait,
    )
    .unwrap();

    // back_order = [2, 3]
    assert_eq!(slot_image_width(&doc, 0), 101);
    assert_eq!(slot_image_width(&doc, 1), 102);
}

#[test]
fn padded_slots_receive_the_blank_filler() {
    let pages = fake_pages(6);
    let blank = compose::blank_filler(&pages[0]);
    let map = folio_map();
    let groups = batch_pages(6, 4).unwrap();

    let doc = compose_sheet(
        &pages,
        &blank,
        &groups[1],
        &map,
        SheetSide::Front,
        Orientation::Portrait,
    )
    .unwrap();

    // Second group holds pages 5, 6 plus two blanks. front_order = [4, 1]:
    // slot 0 (logical 4) is padding, slot 1 (logical 1) is page 5.
    assert_eq!(slot_image_width(&doc, 0), i64::from(blank.width()));
    assert_eq!(slot_image_width(&doc, 1), 104);
}

#[test]
fn rotation_is_a_draw_time_transform() {
    let pages = fake_pages(8);
    let blank = compose::blank_filler(&pages[0]);
    let map = SignatureMap::new(SignatureSize::S8, PaperFormat::A6, PaperFormat::A4);
    let group = batch_pages(8, 8).unwrap()[0];

    let doc = compose_sheet(
        &pages,
        &blank,
        &group,
        &map,
        SheetSide::Front,
        Orientation::Portrait,
    )
    .unwrap();

    let ops: Vec<&str> = content_string(&doc)
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| if l.starts_with("q -") { "rotated" } else { "upright" })
        .collect();

    // rotation table for size 8 marks the last two slots on each side
    assert_eq!(ops, ["upright", "upright", "rotated", "rotated"]);
}

#[test]
fn composing_twice_yields_identical_sheets() {
    let pages = fake_pages(6);
    let blank = compose::blank_filler(&pages[0]);
    let map = SignatureMap::new(SignatureSize::S8, PaperFormat::A6, PaperFormat::A4);
    let groups = batch_pages(6, 8).unwrap();

    for side in [SheetSide::Front, SheetSide::Back] {
        let first = compose_sheet(&pages, &blank, &groups[0], &map, side, Orientation::Portrait)
            .unwrap();
        let second = compose_sheet(&pages, &blank, &groups[0], &map, side, Orientation::Portrait)
            .unwrap();
        assert_eq!(content_string(&first), content_string(&second));
    }

    // the shared filler is untouched by rotated placements
    assert!(blank.pixels().all(|p| p.0 == [255, 255, 255]));
}

#[test]
fn sheet_media_box_follows_orientation() {
    let pages = fake_pages(4);
    let blank = compose::blank_filler(&pages[0]);
    let map = folio_map();
    let group = batch_pages(4, 4).unwrap()[0];

    for (orientation, wider_than_tall) in
        [(Orientation::Portrait, false), (Orientation::Landscape, true)]
    {
        let doc = compose_sheet(&pages, &blank, &group, &map, SheetSide::Front, orientation)
            .unwrap();
        let page = doc.get_dictionary(page_id(&doc)).unwrap();
        let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
        let w = as_f32(&media_box[2]);
        let h = as_f32(&media_box[3]);
        assert_eq!(w > h, wider_than_tall, "orientation {:?}", orientation);
    }
}

#[test]
fn mismatched_group_capacity_is_a_composition_error() {
    let pages = fake_pages(4);
    let blank = compose::blank_filler(&pages[0]);
    let map = folio_map();
    let group = SignatureGroup {
        start: 0,
        real_pages: 4,
        capacity: 8,
    };

    match compose_sheet(
        &pages,
        &blank,
        &group,
        &map,
        SheetSide::Front,
        Orientation::Portrait,
    ) {
        Err(BookletError::Composition(_)) => {}
        other => panic!("expected Composition error, got {:?}", other.map(|_| ())),
    }
}

fn as_f32(obj: &Object) -> f32 {
    match obj {
        Object::Integer(i) => *i as f32,
        Object::Real(r) => *r,
        other => panic!("expected number, got {:?}", other),
    }
}
