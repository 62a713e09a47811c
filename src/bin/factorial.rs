// Copyright 2015 The Ramp Developers
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

use std::process;
use std::time::Instant;

use clap::Parser;
use log::{error, info};

use radixfact::int::DEFAULT_BASE;
use radixfact::{factorial, factorial_in_base, BigInt, Digit, Error};

/// Computes n! with digit-vector multiplication and reports how long it took.
#[derive(Parser, Debug)]
#[command(name = "factorial", version)]
struct Args {
    /// The factorial argument
    #[arg(default_value_t = 1000)]
    n: u64,

    /// Print the number of digits instead of the full value
    #[arg(long)]
    digits: bool,

    /// Base to compute in
    #[arg(long, default_value_t = DEFAULT_BASE)]
    base: Digit,
}

fn compute(args: &Args) -> Result<BigInt, Error> {
    if args.base == DEFAULT_BASE {
        factorial(args.n)
    } else {
        factorial_in_base(args.n, args.base)
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let t = Instant::now();
    let f = compute(&args);
    let elapsed = t.elapsed();

    let f = match f {
        Ok(f) => f,
        Err(e) => {
            error!("failed to compute {}!: {}", args.n, e);
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    info!("{}! took {:?}", args.n, elapsed);

    if args.digits {
        println!("{}! has {} digits", args.n, f.digit_count());
    } else {
        println!("{}! = {}", args.n, f);
    }
    println!("elapsed: {:?}", elapsed);
}
