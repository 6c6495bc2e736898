use console::Style;
use dimmer_core::batch::config::BatchConfig;
use dimmer_core::batch::BatchOutput;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_batch_summary(config: &BatchConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Display Profile Dimmer"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(22)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Search"),
        s.path.apply_to(config.search_dir.display())
    );
    match config.output_dir {
        Some(ref dir) => println!(
            "  {:<14}{}",
            s.label.apply_to("Output"),
            s.path.apply_to(dir.display())
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Output"),
            s.disabled.apply_to("same as search")
        ),
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Match"),
        s.method.apply_to(config.match_policy)
    );
    println!();

    println!("  {}", s.header.apply_to("Brightness"));
    let levels: Vec<String> = config.levels.iter().map(|l| format!("{l:?}")).collect();
    println!(
        "    {:<12}{}",
        s.label.apply_to("Levels"),
        s.value.apply_to(levels.join(", "))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Minimum"),
        s.value.apply_to(config.min_brightness)
    );
    println!();

    println!("  {}", s.header.apply_to("Layout"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Reference"),
        s.value.apply_to(&config.layout.reference_name)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Name at"),
        s.value.apply_to(format!("{:#x}", config.layout.name_offset))
    );
    let [r, g, b] = config.layout.channel_offsets;
    println!(
        "    {:<12}{}",
        s.label.apply_to("RGB max at"),
        s.value.apply_to(format!("{r:#x}, {g:#x}, {b:#x}"))
    );
    println!();
}

pub fn print_written_profiles(output: &BatchOutput) {
    let s = Styles::new();

    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Base"),
        s.path.apply_to(output.base_profile.display())
    );
    println!("  {}", s.header.apply_to("Written"));
    for (i, profile) in output.written.iter().enumerate() {
        println!(
            "    {}. {}",
            s.label.apply_to(i + 1),
            s.path.apply_to(profile.path.display())
        );
    }
    println!();
}
