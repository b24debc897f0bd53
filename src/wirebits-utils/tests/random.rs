use wirebits_utils::{
    math::pow_i,
    rand::{rngs::StdRng, SeedableRng},
    random::*,
};

#[test]
fn range_is_inclusive() {
    let mut rng = StdRng::seed_from_u64(7);

    let mut seen = [false; 4];
    for _ in 0..1000 {
        let v = rand_in_range(&mut rng, 1, 4);
        assert!((1..=4).contains(&v));
        seen[(v - 1) as usize] = true;
    }

    assert_eq!(seen, [true; 4]);
}

#[test]
fn field_clears_unused_bits() {
    let mut rng = StdRng::seed_from_u64(42);

    for bit_len in 1..=64 {
        let mut buf = [0xffu8; 10];
        let len = fill_field(&mut rng, &mut buf, bit_len).unwrap();

        assert_eq!(len, bit_len.div_ceil(8));
        assert_eq!(buf[len - 1] & ((1 << (len * 8 - bit_len)) - 1) as u8, 0);
        assert!(buf[len..].iter().all(|&b| b == 0xff));
    }
}

#[test]
fn field_must_fit() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut buf = [0u8; 2];

    assert_eq!(
        fill_field(&mut rng, &mut buf, 17),
        Err(FieldTooLarge {
            bit_len: 17,
            byte_len: 2
        })
    );
    assert_eq!(buf, [0; 2]);

    assert_eq!(fill_field(&mut rng, &mut buf, 16), Ok(2));
    assert_eq!(fill_field(&mut rng, &mut [], 0), Ok(0));
}

#[test]
fn integer_powers() {
    assert_eq!(pow_i(2, 0), Some(1));
    assert_eq!(pow_i(2, 12), Some(4096));
    assert_eq!(pow_i(-3, 3), Some(-27));
    assert_eq!(pow_i(2, 63), None);
}
