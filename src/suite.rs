/*
 * Copyright (c) Radzivon Bartoshyk, 3/2025. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::conv_support::ConversionFlag;
use crate::fuzz_loop::{run_fuzz_loop, FuzzOptions};
use crate::invoker::{FrameKernel, RgbxToRgbKernel, RgbxToRgbaKernel};
use log::{error, info};
use rayon::ThreadPool;
use std::time::Duration;

fn run_direction(
    kernel: &dyn FrameKernel,
    label: &str,
    width: u32,
    height: u32,
    flag: ConversionFlag,
    duration: Duration,
    pool: &ThreadPool,
) -> bool {
    let options = FuzzOptions {
        width,
        height,
        duration,
        seed: None,
    };
    match run_fuzz_loop(kernel, &[flag], &options, pool) {
        Ok(report) => {
            if report.passed {
                info!(
                    "{} {:?} {}x{}: {} iterations in {:.2?}, {:.2} Mpixel/s",
                    label,
                    flag,
                    width,
                    height,
                    report.stats.iterations,
                    report.stats.elapsed,
                    report.stats.pixels_per_second() / 1_000_000f64
                );
            } else if let Some(failure) = &report.failure {
                error!("{} {:?} {}x{}: {}", label, flag, width, height, failure);
            }
            report.passed
        }
        Err(err) => {
            error!("{} {:?}: invalid configuration: {}", label, flag, err);
            false
        }
    }
}

/// Fuzzes RGBX to RGB conversion with one flag, serial and pooled.
///
/// Returns true only when every iteration inside the duration budget was
/// pixel-exact; diagnostics go to the `log` facade.
pub fn test_rgbx_to_rgb(
    width: u32,
    height: u32,
    flag: ConversionFlag,
    duration: Duration,
    pool: &ThreadPool,
) -> bool {
    run_direction(
        &RgbxToRgbKernel,
        "RGBX -> RGB",
        width,
        height,
        flag,
        duration,
        pool,
    )
}

/// Fuzzes RGBX to RGBA conversion with one flag, serial and pooled.
pub fn test_rgbx_to_rgba(
    width: u32,
    height: u32,
    flag: ConversionFlag,
    duration: Duration,
    pool: &ThreadPool,
) -> bool {
    run_direction(
        &RgbxToRgbaKernel::default(),
        "RGBX -> RGBA",
        width,
        height,
        flag,
        duration,
        pool,
    )
}

/// Runs every conversion direction across all flags, serial and pooled.
///
/// `duration` is the budget per direction and flag combination.
pub fn test_all(width: u32, height: u32, duration: Duration, pool: &ThreadPool) -> bool {
    let mut all_succeeded = true;
    for &flag in &ConversionFlag::ALL {
        all_succeeded &= test_rgbx_to_rgb(width, height, flag, duration, pool);
        all_succeeded &= test_rgbx_to_rgba(width, height, flag, duration, pool);
    }
    all_succeeded
}
