use biquad_rs::prelude::*;

/// Builds a 3rd order Butterworth low pass (w_c = 0.1 * f_nyquist) from three
/// cascaded sections, then prints its poles, zeros, stability and the first
/// 20 samples of its step response.
fn main() {
    let mut bq1 = Biquad::from_normalized(
        3.40538e-04,
        6.83088e-04,
        3.42555e-04,
        -1.03207e+00,
        2.75708e-01,
    );
    let mut bq2 = Biquad::from_normalized(
        1.00000e+00,
        1.99997e+00,
        9.99981e-01,
        -1.14298e+00,
        4.12802e-01,
    );
    let mut bq3 = Biquad::from_normalized(
        1.00000e+00,
        1.99412e+00,
        9.94131e-01,
        -1.40438e+00,
        7.35915e-01,
    );

    let mut chain = &mut bq1 * &mut bq2 * &mut bq3;

    println!("Filter poles");
    for pole in chain.poles() {
        println!("\t{}", pole);
    }

    println!("Filter zeros");
    for zero in chain.zeros() {
        println!("\t{}", zero);
    }

    println!(
        "This filter is {}",
        if chain.stable() { "stable" } else { "unstable" }
    );

    println!("Step response 20 samples");
    for _ in 0..20 {
        println!("\t{}", chain.step(1.0));
    }
}
