//! Headless command-line driver for the two-bone IK solver.
//!
//! Provides four modes of operation:
//! - `solve`: move the end effector to a target point
//! - `pose`: forward kinematics for manually set angles
//! - `extend`: retarget to a fraction of the arm length along the current reach
//! - `info`: print arm dimensions and the configured pose

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use twobone_core::{ArmConfig, TwoBoneError, Vec2};
use twobone_ik::{BoneId, TwoBoneArm};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Analytic two-bone inverse kinematics.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Arm configuration file (TOML). Defaults to a 150/150 arm at 150°/150°.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve for the angles placing the end effector at (x, y).
    #[command(allow_negative_numbers = true)]
    Solve { x: f64, y: f64 },

    /// Set both angles (degrees) and print the resulting positions.
    #[command(allow_negative_numbers = true)]
    Pose { upper: f64, lower: f64 },

    /// Move the end effector to a fraction of the arm length along its
    /// current direction.
    Extend {
        /// Fraction of the arm length, e.g. 0.5.
        fraction: f64,
    },

    /// Print arm dimensions and configured pose.
    Info,
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn load_arm(path: Option<&PathBuf>) -> Result<TwoBoneArm, TwoBoneError> {
    let config = match path {
        Some(path) => {
            info!(path = %path.display(), "loading arm config");
            ArmConfig::from_file(path)?
        }
        None => ArmConfig::default(),
    };
    Ok(TwoBoneArm::from_config(&config)?)
}

fn print_pose(arm: &TwoBoneArm) {
    let (upper, lower) = arm.angles();
    let elbow = arm.joint_position(BoneId::Lower);
    let tip = arm.end_effector();
    println!("Upper: {upper:.3}");
    println!("Lower: {lower:.3}");
    println!("  elbow        [{:.3}, {:.3}]", elbow.x, elbow.y);
    println!("  end effector [{:.3}, {:.3}]", tip.x, tip.y);
    println!("  reach        {:.1}%", arm.reach_fraction() * 100.0);
}

fn run_solve(arm: &mut TwoBoneArm, x: f64, y: f64) -> Result<(), TwoBoneError> {
    arm.try_solve_target(&Vec2::new(x, y))?;
    print_pose(arm);
    Ok(())
}

fn run_pose(arm: &mut TwoBoneArm, upper: f64, lower: f64) -> Result<(), TwoBoneError> {
    arm.set_angle_manually(BoneId::Upper, upper)?;
    arm.set_angle_manually(BoneId::Lower, lower)?;
    print_pose(arm);
    Ok(())
}

fn run_extend(arm: &mut TwoBoneArm, fraction: f64) -> Result<(), TwoBoneError> {
    arm.try_extend_to(fraction)?;
    print_pose(arm);
    Ok(())
}

fn run_info(arm: &TwoBoneArm) {
    println!("=== twobone ===");
    println!("  twobone v{}", env!("CARGO_PKG_VERSION"));
    println!();
    for id in BoneId::ALL {
        println!("  {:<5} length {:.3}", id.name(), arm.length(id));
    }
    println!(
        "  reach        [{:.3}, {:.3}]",
        arm.chain().min_reach(),
        arm.arm_length()
    );
    println!("  epsilon      {:e}", arm.solver().config().epsilon);
    println!();
    print_pose(arm);
}

fn run(cli: Cli) -> Result<(), TwoBoneError> {
    let mut arm = load_arm(cli.config.as_ref())?;
    match cli.command {
        Some(Commands::Solve { x, y }) => run_solve(&mut arm, x, y),
        Some(Commands::Pose { upper, lower }) => run_pose(&mut arm, upper, lower),
        Some(Commands::Extend { fraction }) => run_extend(&mut arm, fraction),
        Some(Commands::Info) | None => {
            run_info(&arm);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_coordinates() {
        let cli = Cli::try_parse_from(["twobone", "solve", "-120", "-35.5"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Solve { x, y }) if (x + 120.0).abs() < 1e-12 && (y + 35.5).abs() < 1e-12
        ));
    }

    #[test]
    fn solve_unreachable_is_error() {
        let mut arm = TwoBoneArm::default();
        let err = run_solve(&mut arm, 500.0, 0.0).unwrap_err();
        assert!(matches!(err, TwoBoneError::Ik(_)));
        assert_eq!(arm.angles(), (150.0, 150.0));
    }

    #[test]
    fn pose_rejects_nan() {
        let mut arm = TwoBoneArm::default();
        let err = run_pose(&mut arm, f64::NAN, 0.0).unwrap_err();
        assert!(matches!(err, TwoBoneError::Validation(_)));
    }

    #[test]
    fn extend_reports_fraction() {
        let mut arm = TwoBoneArm::default();
        run_extend(&mut arm, 0.25).unwrap();
        assert!((arm.reach_fraction() - 0.25).abs() < 1e-9);
        assert!(run_extend(&mut arm, 2.0).is_err());
    }

    #[test]
    fn missing_config_file_is_error() {
        let path = PathBuf::from("/nonexistent/twobone.toml");
        assert!(matches!(
            load_arm(Some(&path)),
            Err(TwoBoneError::Config(_))
        ));
    }
}
