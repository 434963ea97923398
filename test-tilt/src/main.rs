use std::{env, fs::{self, File}, io::Write, path::Path};
use math::RAD_TO_DEG;
use tilt::{Sample, SampleSource, SessionConfig, TickOutcome, TiltSession};

static RESULTS_DIR: &str = "analysis";

/// Replays a recorded sensor CSV as if the sensors were being read live, one
/// record per tick. Expected columns: time, accel x/y/z, gyro x/y/z. Records
/// without a full six axis reading come out as `None`, same as a live source
/// that has nothing ready yet.
struct CsvReplay {
    records: std::vec::IntoIter<Vec<f32>>,
}

impl SampleSource for CsvReplay {
    fn read(&mut self) -> Option<Sample> {
        let record = self.records.next()?;
        if record.len() < 7 {
            return None;
        }
        Some(Sample::from([
            record[1], record[2], record[3],
            record[4], record[5], record[6],
        ]))
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        panic!("Expected CSV file to read samples from");
    }

    // The recording rate has to match or the gyro integration is off.
    let sample_rate: f32 = match args.get(2) {
        Some(value) => value.parse().expect("Sample rate must be a number of Hz"),
        None => tilt::DEFAULT_SAMPLE_RATE,
    };

    // Open the input CSV file.
    let in_path = Path::new(&args[1]);
    let in_file = File::open(in_path).unwrap();

    // Every input CSV file gets its own folder in the results directory.
    let out_dir = in_path.file_name().unwrap().to_str().unwrap().to_string().replace(".csv", "");
    let out_dir = format!("{}/{}", RESULTS_DIR, out_dir);
    fs::create_dir_all(&out_dir).unwrap();

    // One output file per estimator, same row layout for all three.
    let mut accel_file = File::create(format!("{}/{}", out_dir, "accel.csv")).unwrap();
    let mut gyro_file = File::create(format!("{}/{}", out_dir, "gyro.csv")).unwrap();
    let mut fused_file = File::create(format!("{}/{}", out_dir, "fused.csv")).unwrap();
    for file in [&mut accel_file, &mut gyro_file, &mut fused_file] {
        file.write(b"tick,x,y,angle\n").unwrap();
    }

    // Load the whole recording up front so we know how many ticks to run.
    let mut reader = csv::Reader::from_reader(in_file);
    let records: Vec<Vec<f32>> = reader
        .deserialize::<Vec<f32>>()
        .map(|record| record.unwrap())
        .collect();
    let total = records.len();
    let mut source = CsvReplay { records: records.into_iter() };

    let config = SessionConfig {
        sample_rate,
        ..SessionConfig::default()
    };
    let mut session = TiltSession::new(config).unwrap();

    for tick in 0..total {
        match session.poll(&mut source) {
            TickOutcome::Published(report) => {
                for (file, estimate) in [
                    (&mut accel_file, &report.accel),
                    (&mut gyro_file, &report.gyro),
                    (&mut fused_file, &report.fused),
                ] {
                    file.write(format!(
                        "{},{},{},{}\n",
                        tick, estimate.vector.x, estimate.vector.y, estimate.angle
                    ).as_bytes()).unwrap();
                }
            }
            TickOutcome::Skipped(reason) => {
                log::debug!("Tick {} skipped: {:?}", tick, reason);
            }
            TickOutcome::Finished => break,
        }
    }

    log::debug!(
        "Final gyro increment: ({}, {})",
        session.last_delta.vector.x, session.last_delta.vector.y
    );

    match session.last_report() {
        Some(report) => log::info!(
            "Replayed {} ticks ({} skipped); final tilt: accel {:.3} deg, gyro {:.3} deg, fused {:.3} deg",
            session.ticks(),
            session.skipped(),
            report.accel.angle * RAD_TO_DEG,
            report.gyro.angle * RAD_TO_DEG,
            report.fused.angle * RAD_TO_DEG,
        ),
        None => log::warn!("Recording contained no usable samples"),
    }
}
