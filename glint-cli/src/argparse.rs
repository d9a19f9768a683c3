use clap::{App, Arg, ArgMatches};

pub fn parse_args<'a>() -> ArgMatches<'a> {
    App::new("glint")
        .version("0.1")
        .about("Whitted-style toy ray tracer")
        .arg(
            Arg::with_name("scene")
                .long("scene")
                .short("s")
                .help("Built-in scene to render")
                .possible_values(&["cornell", "shadow", "glass", "materials"])
                .default_value("cornell"),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .help("Output file name (.ppm or .png)")
                .default_value("image.png"),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .help("Output width in pixels")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .help("Output height in pixels")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("spp")
                .long("spp")
                .help("Samples per pixel")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("depth")
                .long("depth")
                .help("Maximum ray recursion depth")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("serial")
                .long("serial")
                .help("Render on a single thread"),
        )
        .arg(
            Arg::with_name("progress")
                .long("progress")
                .help("Progress display")
                .possible_values(&["none", "bar", "preview"])
                .default_value("bar"),
        )
        .arg(
            Arg::with_name("upscale")
                .long("upscale")
                .help("Integer upscale factor applied after rendering")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("skybox")
                .long("skybox")
                .help("Environment map for escaped rays")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("shader")
                .long("shader")
                .help("Shading model")
                .possible_values(&["blinn", "normal", "depth", "dot", "curvature"])
                .default_value("blinn"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .help("Log debug information"),
        )
        .get_matches()
}
