//! Concrete end-to-end scenarios (`spec.md` §8, "Concrete end-to-end
//! scenarios").

use lambertw::{w0, w0_f32, wm1};
use lambertw_base::LambertFloat;

#[test]
fn w0_one_brackets_the_omega_constant() {
    let y = w0(1.0);
    assert!(y.inf < 0.567_143_290_409_783_9);
    assert!(y.sup >= 0.567_143_290_409_783_8);
    assert!(y.sup == y.inf || y.sup == y.inf.next_up());
}

#[test]
fn w0_minus_point_three_six() {
    let y = w0(-0.36);
    assert!(y.inf < -0.8);
    assert!(y.contains_closed(-0.806_084_325_2));
}

#[test]
fn wm1_minus_point_one() {
    let y = wm1(-0.1);
    assert!(y.contains_closed(-3.577_152_063_957_2));
}

#[test]
fn wm1_extremely_close_to_zero_engages_scaled_fritsch() {
    let y = wm1(-1.0e-300);
    assert!(y.inf.is_finite() && y.sup.is_finite());
    assert!(y.inf < -690.0);
}

#[test]
fn w0_near_zero_brackets_x_itself() {
    let x = -1.288_576_747_178_308_9e-274;
    let y = w0(x);
    assert!(y.contains_closed(x));
}

#[test]
fn branch_point_identity() {
    let em_up = f64::EM_UP;
    let w0_at_branch = w0(em_up);
    let wm1_at_branch = wm1(em_up);
    assert!(w0_at_branch.contains_closed(-1.0));
    assert!(wm1_at_branch.contains_closed(-1.0));
}

#[test]
fn f32_omega_constant() {
    let y = w0_f32(1.0_f32);
    assert!(y.inf < 0.567_143_3_f32);
    assert!(y.sup >= 0.567_143_2_f32);
}
