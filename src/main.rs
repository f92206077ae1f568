//! Demo scene: render an OBJ model (or the built-in cube) to an image file.
//!
//! ```text
//! softrast [MODEL.obj] [-o OUT] [--wireframe] [--anaglyph] [--spin DEG]
//! ```

use std::error::Error;

use softrast::encode;
use softrast::prelude::*;

struct Args {
    model: Option<String>,
    output: String,
    wireframe: bool,
    anaglyph: bool,
    spin_degrees: f32,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        model: None,
        output: "out.ppm".to_string(),
        wireframe: false,
        anaglyph: false,
        spin_degrees: 0.0,
    };

    let mut argv = std::env::args().skip(1);
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                args.output = argv.next().ok_or("missing value for --output")?;
            }
            "--wireframe" => args.wireframe = true,
            "--anaglyph" => args.anaglyph = true,
            "--spin" => {
                let value = argv.next().ok_or("missing value for --spin")?;
                args.spin_degrees = value
                    .parse()
                    .map_err(|_| format!("invalid --spin value: {value}"))?;
            }
            _ if arg.starts_with('-') => return Err(format!("unknown flag: {arg}")),
            _ => args.model = Some(arg),
        }
    }
    Ok(args)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args()?;

    let mut mesh = match &args.model {
        Some(path) => Mesh::from_obj_or_empty(path),
        None => Mesh::unit_cube(),
    };
    mesh.set_rotation_degrees(0.0, args.spin_degrees, 0.0);
    mesh.set_translation(0.0, 0.0, 3.0);

    let camera = Camera::new(Vec3::ZERO, Vec3::new(0.01, 0.01, 1.0));
    let mut device = Device::new(1024, 768);

    if args.anaglyph {
        device.render_anaglyph(&camera, &[mesh], 90.0);
    } else {
        let mode = if args.wireframe {
            RenderMode::Wireframe
        } else {
            RenderMode::Filled
        };
        device.render(&camera, &[mesh], 90.0, mode);
    }

    let format = OutputFormat::from_path(&args.output);
    encode::write(&device, &args.output, format)?;
    println!("wrote {}", args.output);
    Ok(())
}
