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
use crate::conv_support::{ConversionFlag, PixelLayout};
use crate::generator::{FrameGenerator, PADDING_SENTINEL};
use crate::invoker::{ConversionInvoker, ExecutionMode, FrameKernel};
use crate::verifier::{verify_conversion, verify_padding, PixelMismatch};
use crate::ConvError;
use rayon::ThreadPool;
use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};

/// Iteration and timing counters retained for throughput reporting on both
/// passing and failing runs.
#[derive(Debug, Default, Copy, Clone)]
pub struct TestStatistics {
    pub iterations: u64,
    pub pixels: u64,
    pub elapsed: Duration,
}

impl TestStatistics {
    pub fn pixels_per_second(&self) -> f64 {
        let seconds = self.elapsed.as_secs_f64();
        if seconds <= 0f64 {
            return 0f64;
        }
        self.pixels as f64 / seconds
    }
}

/// First failure observed by the fuzz loop; the loop never continues past it.
#[derive(Debug)]
pub enum FuzzFailure {
    Kernel {
        flag: ConversionFlag,
        mode: ExecutionMode,
        error: ConvError,
    },
    Mismatch {
        flag: ConversionFlag,
        mode: ExecutionMode,
        mismatch: PixelMismatch,
    },
    PaddingClobbered {
        flag: ConversionFlag,
        mode: ExecutionMode,
        y: u32,
        offset: usize,
    },
}

impl Display for FuzzFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FuzzFailure::Kernel { flag, mode, error } => f.write_fmt(format_args!(
                "kernel failed ({:?}, {:?} execution): {}",
                flag, mode, error
            )),
            FuzzFailure::Mismatch {
                flag,
                mode,
                mismatch,
            } => f.write_fmt(format_args!(
                "incorrect conversion ({:?}, {:?} execution): {}",
                flag, mode, mismatch
            )),
            FuzzFailure::PaddingClobbered {
                flag,
                mode,
                y,
                offset,
            } => f.write_fmt(format_args!(
                "destination padding overwritten ({:?}, {:?} execution) at row {}, byte {}",
                flag, mode, y, offset
            )),
        }
    }
}

/// Outcome of one fuzz loop invocation.
#[derive(Debug)]
pub struct FuzzReport {
    pub passed: bool,
    pub stats: TestStatistics,
    pub failure: Option<FuzzFailure>,
}

/// Fuzz loop configuration. Width and height stay fixed for the whole call;
/// row padding and pixel content are re-randomized every iteration.
#[derive(Debug, Clone)]
pub struct FuzzOptions {
    pub width: u32,
    pub height: u32,
    pub duration: Duration,
    /// Fixed seed for reproducing a failing run, `None` for fresh entropy.
    pub seed: Option<u64>,
}

/// Drives generate/convert/verify iterations until the wall-clock budget
/// elapses or a failure is observed.
///
/// Each iteration converts one fresh source frame once per configured flag in
/// both serial and pooled execution. The first kernel error, pixel mismatch
/// or clobbered padding byte stops the loop immediately; a running iteration
/// is never cancelled, so the elapsed time may exceed the budget by at most
/// one iteration.
///
/// Invalid configuration (zero width/height, zero duration) is rejected
/// before the first iteration.
pub fn run_fuzz_loop(
    kernel: &dyn FrameKernel,
    flags: &[ConversionFlag],
    options: &FuzzOptions,
    pool: &ThreadPool,
) -> Result<FuzzReport, ConvError> {
    if options.width == 0 || options.height == 0 {
        return Err(ConvError::ZeroBaseSize);
    }
    if options.duration.is_zero() {
        return Err(ConvError::ZeroDuration);
    }

    let mut generator = match options.seed {
        Some(seed) => FrameGenerator::from_seed(seed),
        None => FrameGenerator::from_entropy(),
    };
    let invoker = ConversionInvoker::new(pool);
    let mut stats = TestStatistics::default();
    let mut failure: Option<FuzzFailure> = None;
    let start = Instant::now();

    'running: loop {
        let src = generator.random_frame(options.width, options.height, PixelLayout::Rgbx);
        let src = src.to_fixed();
        for &flag in flags {
            for mode in ExecutionMode::ALL {
                let mut dst = generator.target_frame(options.width, options.height, kernel.dst_layout());
                if let Err(error) = invoker.invoke(kernel, &src, &mut dst, flag, mode) {
                    failure = Some(FuzzFailure::Kernel { flag, mode, error });
                    break 'running;
                }
                let dst = dst.to_fixed();
                if let Some(mismatch) =
                    verify_conversion(&src, &dst, kernel.dst_layout(), flag, kernel.alpha_fill())
                {
                    failure = Some(FuzzFailure::Mismatch {
                        flag,
                        mode,
                        mismatch,
                    });
                    break 'running;
                }
                if let Some((y, offset)) =
                    verify_padding(&dst, kernel.dst_layout(), PADDING_SENTINEL)
                {
                    failure = Some(FuzzFailure::PaddingClobbered {
                        flag,
                        mode,
                        y,
                        offset,
                    });
                    break 'running;
                }
                stats.pixels += options.width as u64 * options.height as u64;
            }
        }
        stats.iterations += 1;
        if start.elapsed() >= options.duration {
            break;
        }
    }

    stats.elapsed = start.elapsed();
    Ok(FuzzReport {
        passed: failure.is_none(),
        stats,
        failure,
    })
}
