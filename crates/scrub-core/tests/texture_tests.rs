// Host-side tests for the pixel-format catalog and mip-chain arithmetic.

use scrub_core::*;

fn format<'a>(catalog: &'a FormatCatalog, name: &str) -> Option<&'a PixelFormat> {
    catalog.index_of(name).and_then(|i| catalog.get(i))
}

#[test]
fn rgba8_unorm_is_four_bytes() {
    let f = simple_format("R8G8B8A8_UNORM", None, None).unwrap();
    assert_eq!(f.bytes_per_block, 4);
    assert_eq!((f.block_width, f.block_height), (1, 1));
    assert_eq!(f.group, GROUP_NORMALIZED);
    assert_eq!(
        f.description,
        "Each pixel contains UNORM-normalized 8-bit R, G, B, and A channels, totalling 32 bits per pixel (4 bytes per pixel)."
    );
}

#[test]
fn derived_groups_and_descriptions() {
    let rgb32f = simple_format("R32G32B32_FLOAT", None, None).unwrap();
    assert_eq!(rgb32f.bytes_per_block, 12);
    assert_eq!(rgb32f.group, GROUP_FLOAT);
    assert!(rgb32f.description.contains("float 32-bit R, G, and B channels"));

    let rg16i = simple_format("R16G16_SINT", None, None).unwrap();
    assert_eq!(rg16i.group, GROUP_INTEGER);
    assert!(rg16i.description.contains("signed 16-bit R and G channels"));

    let r8 = simple_format("R8_UINT", None, None).unwrap();
    assert!(r8.description.contains("unsigned 8-bit R channel,"));

    let d32 = simple_format("D32_FLOAT", None, None).unwrap();
    assert_eq!(d32.group, GROUP_DEPTH_STENCIL);
}

#[test]
fn multi_section_formats_need_overrides() {
    assert_eq!(
        simple_format("D24_UNORM_S8_UINT", None, None),
        Err(FormatError::NeedsOverride("D24_UNORM_S8_UINT".into(), "group"))
    );
    let ds = simple_format("D24_UNORM_S8_UINT", Some("depth + stencil"), Some(GROUP_DEPTH_STENCIL))
        .unwrap();
    assert_eq!(ds.bytes_per_block, 4);
    assert_eq!(ds.description, "depth + stencil");
}

#[test]
fn malformed_names_are_rejected() {
    assert_eq!(
        simple_format("R8G8_UNORM_X", None, None),
        Err(FormatError::OddSections("R8G8_UNORM_X".into()))
    );
    assert_eq!(
        simple_format("R8_HALF", None, None),
        Err(FormatError::UnknownKind {
            name: "R8_HALF".into(),
            kind: "HALF".into()
        })
    );
    assert_eq!(
        simple_format("Q8_UINT", None, None),
        Err(FormatError::NoChannels {
            name: "Q8_UINT".into(),
            section: "Q8".into()
        })
    );
    assert_eq!(
        simple_format("R10G10B10A2_UNORM", None, None),
        Err(FormatError::MixedWidths("R10G10B10A2_UNORM".into()))
    );
    assert_eq!(
        simple_format("R4_UNORM", None, None),
        Err(FormatError::PartialByte {
            name: "R4_UNORM".into(),
            bits: 4
        })
    );
}

#[test]
fn channel_parsing() {
    assert_eq!(
        parse_channels("R32G32"),
        vec![Channel { name: 'R', bits: 32 }, Channel { name: 'G', bits: 32 }]
    );
    assert_eq!(parse_channels("X24"), vec![Channel { name: 'X', bits: 24 }]);
    assert!(parse_channels("UNORM").is_empty());
}

#[test]
fn builtin_catalog_layout() {
    let catalog = FormatCatalog::builtin().unwrap();
    let formats = catalog.formats();
    assert_eq!(formats[0].name, "R8G8B8A8_UNORM");
    assert!(formats.last().unwrap().is_custom());

    let bc1 = format(&catalog, "BC1").unwrap();
    assert_eq!((bc1.block_width, bc1.block_height, bc1.bytes_per_block), (4, 4, 8));
    assert!(bc1.description.ends_with("totalling 0.5 bytes per pixel."));
    let bc7 = format(&catalog, "BC7").unwrap();
    assert!(bc7.description.ends_with("totalling 1 byte per pixel."));

    assert_eq!(format(&catalog, "R11G11B10_FLOAT").unwrap().bytes_per_block, 4);
    assert_eq!(format(&catalog, "R32G32B32A32_UINT").unwrap().bytes_per_block, 16);
    assert!(format(&catalog, "R9_UNORM").is_none());
    assert_eq!(catalog.index_of("R8G8B8A8_UNORM"), Some(0));
}

#[test]
fn catalog_groups_are_contiguous_runs() {
    let catalog = FormatCatalog::builtin().unwrap();
    let groups = catalog.groups();
    let names: Vec<&str> = groups.iter().map(|(g, _)| *g).collect();
    assert_eq!(
        names,
        vec![
            GROUP_NORMALIZED,
            GROUP_DEPTH_STENCIL,
            GROUP_FLOAT,
            GROUP_INTEGER,
            GROUP_BLOCK_COMPRESSED,
            CUSTOM_FORMAT_NAME,
        ]
    );
    let covered: usize = groups.iter().map(|(_, f)| f.len()).sum();
    assert_eq!(covered, catalog.formats().len());
    let (_, bcs) = groups[4];
    assert_eq!(bcs[0].name, "BC1");
    assert_eq!(bcs.len(), 7);
}

#[test]
fn rgba8_square_chain() {
    let format = simple_format("R8G8B8A8_UNORM", None, None).unwrap();
    let levels = mip_chain(&ImageDesc::new(&format, 256, 256)).unwrap();
    assert_eq!(levels.len(), 9);
    assert_eq!(levels[0].byte_size, 0x40000);
    assert_eq!(levels[1].offset, 0x40000);
    assert_eq!((levels[8].width, levels[8].height), (1, 1));
    assert_eq!(total_size(&levels), 349_524);
    assert_eq!(levels[8].offset + levels[8].byte_size, total_size(&levels));
}

#[test]
fn non_square_dimensions_halve_independently() {
    let format = simple_format("R8_UNORM", None, None).unwrap();
    let levels = mip_chain(&ImageDesc::new(&format, 4, 1)).unwrap();
    let dims: Vec<(u32, u32)> = levels.iter().map(|l| (l.width, l.height)).collect();
    assert_eq!(dims, vec![(4, 1), (2, 1), (1, 1)]);
}

#[test]
fn block_compressed_levels_pad_to_block() {
    let catalog = FormatCatalog::builtin().unwrap();
    let bc1 = format(&catalog, "BC1").unwrap();
    let levels = mip_chain(&ImageDesc::new(bc1, 5, 5)).unwrap();
    assert_eq!(levels.len(), 3);
    assert_eq!((levels[0].padded_width, levels[0].padded_height), (8, 8));
    assert_eq!(levels[0].byte_size, 32);
    assert_eq!((levels[1].padded_width, levels[1].padded_height), (4, 4));
    assert_eq!(levels[1].byte_size, 8);
    assert_eq!(levels[2].byte_size, 8);
    assert_eq!(levels[2].offset, 40);
}

#[test]
fn widest_image_pads_past_u32() {
    let catalog = FormatCatalog::builtin().unwrap();
    let bc1 = format(&catalog, "BC1").unwrap();
    let levels = mip_chain(&ImageDesc::new(bc1, u32::MAX, 4)).unwrap();
    assert_eq!(levels[0].padded_width, 1 << 32);
    assert_eq!(levels[0].padded_height, 4);
    assert_eq!(levels[0].byte_size, (1 << 30) * 8);
    assert_eq!(levels.len(), 32);
}

#[test]
fn huge_custom_blocks_report_overflow() {
    let image = ImageDesc::new(&custom_format(), u32::MAX, u32::MAX).with_block(1, 1, u32::MAX);
    assert_eq!(mip_chain(&image), Err(MipError::Overflow { level: 0 }));
}

#[test]
fn custom_block_layout() {
    let image = ImageDesc::new(&custom_format(), 16, 8).with_block(2, 2, 3);
    let levels = mip_chain(&image).unwrap();
    assert_eq!(levels[0].byte_size, 8 * 4 * 3);
    assert_eq!(
        mip_chain(&ImageDesc::new(&custom_format(), 16, 8)),
        Err(MipError::ZeroBlock {
            width: 0,
            height: 0
        })
    );
}

#[test]
fn hex_formatting() {
    assert_eq!(hex0x(255u64), "0x000000ff");
    assert_eq!(hex0x(0x1_0000_0000u64), "0x100000000");
    assert_eq!(hex0x(-16i64), "-0x00000010");
}
