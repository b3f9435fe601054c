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
use flexi_logger::Logger;
use log::info;
use rgbx_verify::{test_all, FrameGenerator};
use std::time::Duration;

fn main() {
    let _logger = Logger::try_with_str("info")
        .unwrap_or_else(|e| panic!("Logger initialization failed with {}", e))
        .log_to_stdout()
        .start()
        .unwrap_or_else(|e| panic!("Logger initialization failed with {}", e));

    let pool = rayon::ThreadPoolBuilder::new()
        .build()
        .expect("failed to build thread pool");

    let mut all_succeeded = true;

    for (width, height) in [(640u32, 480u32), (1920, 1080)] {
        info!("fuzzing conversions at {}x{}", width, height);
        all_succeeded &= test_all(width, height, Duration::from_secs(1), &pool);
    }

    for (width, height) in FrameGenerator::boundary_sizes() {
        info!("fuzzing conversions at boundary size {}x{}", width, height);
        all_succeeded &= test_all(width, height, Duration::from_millis(100), &pool);
    }

    let (width, height) = FrameGenerator::from_entropy().random_size(1..=512, 1..=512);
    info!("fuzzing conversions at random size {}x{}", width, height);
    all_succeeded &= test_all(width, height, Duration::from_millis(250), &pool);

    if all_succeeded {
        info!("all conversion directions verified");
    } else {
        log::error!("verification failed, see diagnostics above");
        std::process::exit(1);
    }
}
