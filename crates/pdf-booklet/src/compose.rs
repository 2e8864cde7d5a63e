//! Sheet composition
//!
//! Builds one physical sheet side as a single-page PDF: every slot of the
//! signature map receives its rasterized sub-page (or the shared blank
//! filler), scaled to the leaf format and placed at the slot coordinate.
//!
//! Rotation is applied as a draw-time transform in the content stream, never
//! to the stored image. The blank filler is shared across groups and must
//! stay untouched.

use crate::batch::SignatureGroup;
use crate::constants::{JPEG_QUALITY, mm_to_pt};
use crate::signature::SignatureMap;
use crate::types::{BookletError, Orientation, Result, SheetSide};
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use lopdf::{Dictionary, Document, Object, Stream};

/// Compose one side of a physical sheet into a fresh single-page document.
pub fn compose_sheet(
    pages: &[RgbImage],
    blank: &RgbImage,
    group: &SignatureGroup,
    map: &SignatureMap,
    side: SheetSide,
    orientation: Orientation,
) -> Result<Document> {
    if group.capacity != map.pages_per_sheet() {
        return Err(BookletError::Composition(format!(
            "group capacity {} does not match signature size {}",
            group.capacity,
            map.pages_per_sheet()
        )));
    }

    let order = map.order(side);
    let rotation = map.rotation(side);
    let coords = map.slot_coordinates();

    let (sheet_w_mm, sheet_h_mm) = map
        .sheet_format()
        .dimensions_with_orientation(orientation);
    let (leaf_w_mm, leaf_h_mm) = map.leaf_format().dimensions_mm();
    let leaf_w = mm_to_pt(leaf_w_mm);
    let leaf_h = mm_to_pt(leaf_h_mm);

    let mut output = Document::with_version("1.7");
    let pages_id = output.new_object_id();

    let mut content_ops = Vec::with_capacity(order.len());
    let mut xobjects = Dictionary::new();

    for (slot, &logical) in order.iter().enumerate() {
        let image = match group.source_index(logical) {
            Some(idx) => pages.get(idx).ok_or_else(|| {
                BookletError::Composition(format!(
                    "logical page {} resolves past the end of the page sequence",
                    idx + 1
                ))
            })?,
            None => blank,
        };

        let xobject_name = format!("P{}", slot);
        let xobject_id = output.add_object(image_xobject(image)?);
        xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));

        let (x_mm, y_mm) = coords[slot];
        let x = mm_to_pt(x_mm);
        let y = mm_to_pt(y_mm);

        // Image XObjects span the unit square; the cm matrix scales them to
        // leaf size. A negated matrix about the slot's far corner gives the
        // 180° rotation.
        let cmd = if rotation[slot] {
            format!(
                "q {} 0 0 {} {} {} cm /{} Do Q\n",
                -leaf_w,
                -leaf_h,
                x + leaf_w,
                y + leaf_h,
                xobject_name
            )
        } else {
            format!(
                "q {} 0 0 {} {} {} cm /{} Do Q\n",
                leaf_w, leaf_h, x, y, xobject_name
            )
        };
        content_ops.push(cmd);
    }

    let content = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(mm_to_pt(sheet_w_mm)),
            Object::Real(mm_to_pt(sheet_h_mm)),
        ]),
    );
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));
    let page_id = output.add_object(page_dict);

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(vec![Object::Reference(page_id)])),
        ("Count", Object::Integer(1)),
    ]);
    output.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    output.trailer.set("Root", catalog_id);

    Ok(output)
}

/// Create a shared blank (all-white) filler image matching the given page.
pub fn blank_filler(reference: &RgbImage) -> RgbImage {
    let (w, h) = reference.dimensions();
    RgbImage::from_pixel(w, h, image::Rgb([255, 255, 255]))
}

/// Embed a rasterized page as a DCTDecode image XObject.
fn image_xobject(image: &RgbImage) -> Result<Stream> {
    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY).encode_image(image)?;

    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(i64::from(image.width())));
    dict.set("Height", Object::Integer(i64::from(image.height())));
    dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));

    // Already JPEG-compressed
    let mut stream = Stream::new(dict, jpeg);
    stream.allows_compression = false;
    Ok(stream)
}
