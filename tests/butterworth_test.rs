use assert_approx_eq::assert_approx_eq;
use biquad_rs::prelude::*;

// 3rd order Butterworth low pass, w_c = 0.1 * f_nyquist.
fn butterworth() -> [Biquad; 3] {
    [
        Biquad::from_normalized(
            3.40538e-04,
            6.83088e-04,
            3.42555e-04,
            -1.03207e+00,
            2.75708e-01,
        ),
        Biquad::from_normalized(
            1.00000e+00,
            1.99997e+00,
            9.99981e-01,
            -1.14298e+00,
            4.12802e-01,
        ),
        Biquad::from_normalized(
            1.00000e+00,
            1.99412e+00,
            9.94131e-01,
            -1.40438e+00,
            7.35915e-01,
        ),
    ]
}

#[test]
fn test_step_response() {
    let [mut bq1, mut bq2, mut bq3] = butterworth();
    let mut chain = &mut bq1 * &mut bq2 * &mut bq3;
    assert!(chain.stable());

    let response = chain.step_batch(&[1.0; 200]);
    assert!(chain.stable());

    // Rises monotonically up to the first overshoot.
    assert!(response[0] > 0.0);
    for i in 1..11 {
        assert!(response[i] > response[i - 1]);
    }
    assert!(response[10] > 1.0);
    assert!(response[11] < 1.2);

    assert_approx_eq!(response[19], 1.0, 5e-3);
    for y in &response[50..] {
        assert_approx_eq!(*y, 1.0, 1e-3);
    }
}

#[test]
fn test_poles_and_zeros() {
    let mut sections = butterworth();
    let chain: BiquadChain = sections.iter_mut().collect();

    let poles = chain.poles();
    assert_eq!(poles.len(), 6);
    for pair in poles.chunks(2) {
        assert!(pair[0].norm() < 1.0);
        assert_approx_eq!(pair[0].re, pair[1].re, 1e-12);
        assert_approx_eq!(pair[0].im, -pair[1].im, 1e-12);
    }
    assert_approx_eq!(poles[0].norm(), 0.52508, 1e-4);
    assert_approx_eq!(poles[2].norm(), 0.64250, 1e-4);
    assert_approx_eq!(poles[4].norm(), 0.85785, 1e-4);

    // A low pass puts its zeros near z = -1.
    let zeros = chain.zeros();
    assert_eq!(zeros.len(), 6);
    for z in zeros {
        assert_approx_eq!(z.re, -1.0, 5e-3);
        assert_approx_eq!(z.im, 0.0, 5e-3);
    }
}

#[test]
fn test_chain_matches_nested_steps() {
    let [mut bq1, mut bq2, mut bq3] = butterworth();
    let [mut r1, mut r2, mut r3] = butterworth();
    let input: Vec<f64> = (0..100).map(|n| (0.3 * n as f64).sin()).collect();

    let mut chain = BiquadChain::new();
    chain.add(&mut bq1).add(&mut bq2).add(&mut bq3);
    for x in input {
        assert_eq!(chain.step(x), r3.step(r2.step(r1.step(x))));
    }
}

#[test]
fn test_pidf_loop() {
    // Drive a discrete first order plant y[n+1] = 0.9 y[n] + 0.1 u[n] with a
    // PI controller and check it settles on the setpoint.
    let mut pid = Biquad::pidf(&PidfGains::new(2.0, 5.0, 0.0, 100.0, 0.01));

    let mut y = 0.0;
    for _ in 0..2000 {
        let u = pid.step(1.0 - y);
        y = 0.9 * y + 0.1 * u;
    }
    assert_approx_eq!(y, 1.0, 1e-3);
}
