use wirebits_utils::hexdump::*;

#[test]
fn full_line_with_address() {
    let data = b"Hello World!\n\x00\x01\x02";
    let lines: Vec<_> = hex_lines(data, true).collect();

    assert_eq!(
        lines,
        ["00000 : 48 65 6c 6c 6f 20 57 6f -- 72 6c 64 21 0a 00 01 02  |  Hello World!...."]
    );
}

#[test]
fn short_line_is_padded() {
    let full: Vec<_> = hex_lines(&[0x41; 16], false).collect();
    let short: Vec<_> = hex_lines(&[0x41; 3], false).collect();
    let nine: Vec<_> = hex_lines(&[0x41; 9], false).collect();

    assert_eq!(short[0], format!("41 41 41 {} |  AAA", " ".repeat(42)));

    // The ASCII column starts at the same offset regardless of length.
    let column = full[0].find('|').unwrap();
    assert_eq!(short[0].find('|'), Some(column));
    assert_eq!(nine[0].find('|'), Some(column));
}

#[test]
fn addresses_advance_per_line() {
    let data: Vec<u8> = (0..40).collect();
    let lines: Vec<_> = hex_lines(&data, true).collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("00000 : 00 01"));
    assert!(lines[1].starts_with("00010 : 10 11"));
    assert!(lines[2].starts_with("00020 : 20 21"));
    assert!(lines[2].ends_with(" |   !\"#$%&'"));
}

#[test]
fn writer_and_callback_agree() {
    let data: Vec<u8> = (0..=255).collect();

    let mut out = Vec::new();
    dump_hex(&mut out, &data, true).unwrap();

    let mut collected = String::new();
    dump_hex_with(&data, true, |line| {
        collected.push_str(line);
        collected.push('\n');
    });

    assert_eq!(String::from_utf8(out).unwrap(), collected);
    assert_eq!(collected.lines().count(), 16);
}

#[test]
fn empty_input_has_no_lines() {
    assert_eq!(hex_lines(&[], true).count(), 0);
}
