use super::*;

#[test]
fn exact_constraints_loosen_for_children() {
    assert_eq!(
        MeasureSpec::exactly(120.0).for_child(),
        MeasureSpec::at_most(120.0)
    );
    assert_eq!(
        MeasureSpec::at_most(80.0).for_child(),
        MeasureSpec::at_most(80.0)
    );
    assert_eq!(
        MeasureSpec::unspecified().for_child(),
        MeasureSpec::unspecified()
    );
}

#[test]
fn resolve_honors_mode() {
    assert_eq!(MeasureSpec::exactly(50.0).resolve(10.0), 50.0);
    assert_eq!(MeasureSpec::at_most(50.0).resolve(70.0), 50.0);
    assert_eq!(MeasureSpec::at_most(50.0).resolve(30.0), 30.0);
    assert_eq!(MeasureSpec::unspecified().resolve(70.0), 70.0);
}

#[test]
fn pack_layout_matches_mode_bits() {
    assert_eq!(MeasureSpec::exactly(300.0).pack(), (1 << 30) | 300);
    assert_eq!(MeasureSpec::at_most(7.0).pack(), (2 << 30) | 7);
    assert_eq!(MeasureSpec::unspecified().pack(), 0);

    let spec = MeasureSpec::unpack((2 << 30) | 640);
    assert_eq!(spec, MeasureSpec::at_most(640.0));
}

#[test]
fn pack_truncates_fractional_sizes() {
    assert_eq!(
        MeasureSpec::unpack(MeasureSpec::exactly(99.9).pack()),
        MeasureSpec::exactly(99.0)
    );
}

#[test]
#[should_panic(expected = "unreachable measure mode")]
fn unpack_panics_on_invalid_mode_bits() {
    let _ = MeasureSpec::unpack(3 << 30);
}
