//! In-memory PDF documents for tests.
//!
//! Shared by the unit tests (through `src/fixtures.rs`) and the integration
//! tests, so it only depends on `lopdf`.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};

/// Password of [`encrypted_pdf_with_lines`].
pub const PASSWORD: &str = "secret";

const PAD_BYTES: [u8; 32] = [
    0x28, 0xBF, 0x4E, 0x5E, 0x4E, 0x75, 0x8A, 0x41, 0x64, 0x00, 0x4E, 0x56, 0xFF, 0xFA, 0x01, 0x08,
    0x2E, 0x2E, 0x00, 0xB6, 0xD0, 0x68, 0x3E, 0x80, 0x2F, 0x0C, 0xA9, 0xFE, 0x64, 0x53, 0x69, 0x7A,
];
const FILE_ID: &[u8; 16] = b"cardstmt-test-id";
const PERMISSIONS: i64 = -4;

// RC4 keys for PASSWORD with owner entry 0..32, PERMISSIONS and FILE_ID
// (standard handler, revision 2, 40-bit): the file key, and the key for
// object 4 generation 0.
const FILE_KEY: [u8; 5] = [0x08, 0xF7, 0x25, 0xAD, 0x33];
const CONTENT_ID: ObjectId = (4, 0);
const CONTENT_KEY: [u8; 10] = [0x66, 0xD5, 0x87, 0xD5, 0xF3, 0xAA, 0x78, 0xD3, 0x5A, 0x75];

/// Build a document with one Courier text line per entry, one page per slice.
pub fn document_with_pages(pages: &[&[&str]]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 10.into()]));
            operations.push(Operation::new(
                "Td",
                vec![40.into(), (800 - 14 * i as i64).into()],
            ));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

/// PDF bytes with one page per slice.
pub fn pdf_with_pages(pages: &[&[&str]]) -> Vec<u8> {
    save(document_with_pages(pages))
}

/// Single-page PDF bytes.
pub fn pdf_with_lines(lines: &[&str]) -> Vec<u8> {
    pdf_with_pages(&[lines])
}

/// A well-formed PDF with a page but no text layer.
pub fn blank_pdf() -> Vec<u8> {
    pdf_with_lines(&[])
}

/// A well-formed PDF whose page tree is empty.
pub fn pageless_pdf() -> Vec<u8> {
    save(document_with_pages(&[]))
}

/// Single-page PDF encrypted with the standard handler under [`PASSWORD`].
pub fn encrypted_pdf_with_lines(lines: &[&str]) -> Vec<u8> {
    let mut doc = document_with_pages(&[lines]);

    let stream = doc
        .get_object_mut(CONTENT_ID)
        .and_then(Object::as_stream_mut)
        .unwrap();
    let encrypted = rc4(&CONTENT_KEY, &stream.content);
    stream.set_content(encrypted);

    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 2,
        "R" => 2,
        "Length" => 40,
        "P" => PERMISSIONS,
        "O" => Object::String((0u8..32).collect(), StringFormat::Hexadecimal),
        "U" => Object::String(rc4(&FILE_KEY, &PAD_BYTES), StringFormat::Hexadecimal),
        "CF" => dictionary! {
            "StdCF" => dictionary! { "CFM" => "V2" },
        },
    });
    doc.trailer.set("Encrypt", encrypt_id);
    doc.trailer.set(
        "ID",
        vec![
            Object::String(FILE_ID.to_vec(), StringFormat::Literal),
            Object::String(FILE_ID.to_vec(), StringFormat::Literal),
        ],
    );

    save(doc)
}

fn rc4(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut state: [u8; 256] = std::array::from_fn(|i| i as u8);
    let mut j = 0u8;
    for i in 0..256 {
        j = j.wrapping_add(state[i]).wrapping_add(key[i % key.len()]);
        state.swap(i, j as usize);
    }

    let (mut i, mut j) = (0u8, 0u8);
    data.iter()
        .map(|byte| {
            i = i.wrapping_add(1);
            j = j.wrapping_add(state[i as usize]);
            state.swap(i as usize, j as usize);
            byte ^ state[state[i as usize].wrapping_add(state[j as usize]) as usize]
        })
        .collect()
}
