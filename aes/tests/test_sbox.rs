use rijndael::rijndael::sbox::{INV_SBOX, RCON, SBOX, affine, inv_affine, inv_sbox, sbox};

#[test]
fn test_sbox_known_values() {
    assert_eq!(sbox(0x00), 0x63);
    assert_eq!(sbox(0x01), 0x7c);
    assert_eq!(sbox(0x53), 0xed);
    assert_eq!(sbox(0xff), 0x16);
    assert_eq!(
        &SBOX[..16],
        &[
            0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7,
            0xab, 0x76
        ]
    );
}

#[test]
fn test_inv_sbox_known_values() {
    assert_eq!(inv_sbox(0x63), 0x00);
    assert_eq!(inv_sbox(0x00), 0x52);
    assert_eq!(inv_sbox(0xed), 0x53);
    assert_eq!(INV_SBOX[0xff], 0x7d);
}

#[test]
fn test_sbox_is_a_permutation() {
    for x in 0..=255u8 {
        assert_eq!(inv_sbox(sbox(x)), x);
        assert_eq!(sbox(inv_sbox(x)), x);
    }
}

#[test]
fn test_sbox_has_no_fixed_points() {
    for x in 0..=255u8 {
        assert_ne!(sbox(x), x);
        assert_ne!(sbox(x), !x);
    }
}

#[test]
fn test_affine_inverts() {
    for x in 0..=255u8 {
        assert_eq!(inv_affine(affine(x)), x);
    }
}

#[test]
fn test_rcon() {
    assert_eq!(RCON[0], 0x8d);
    assert_eq!(
        &RCON[1..11],
        &[0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36]
    );
    // x имеет порядок 51
    assert_eq!(RCON[51], 0x8d);
    assert_eq!(RCON[254], 0xcb);
}
