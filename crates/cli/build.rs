use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("postdraft")
        .version("0.3.0")
        .author("Postdraft Contributors")
        .about("Draft social media posts from web pages")
        .arg(clap::arg!(<INPUT> "URL to fetch, local HTML file, or '-' for stdin"))
        .arg(
            clap::arg!(-p --platform <PLATFORM> "Target platform")
                .default_value("linkedin")
                .value_parser(["linkedin", "twitter", "instagram", "facebook"]),
        )
        .arg(
            clap::arg!(-s --style <STYLE> "Post style")
                .default_value("professional")
                .value_parser(["professional", "modern", "minimal"]),
        )
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (text, json)")
                .default_value("text")
                .value_parser(["text", "json"]),
        )
        .arg(clap::arg!(--url <URL> "Base URL for resolving relative links").value_name("URL"))
        .arg(clap::arg!(--seed <NUM> "Fixed seed for reproducible hook selection"))
        .arg(clap::arg!(--"summary-only" "Print the extracted page summary as JSON and exit"))
        .arg(clap::arg!(--remote "Delegate body generation to a remote model"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "postdraft", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "postdraft", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "postdraft", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "postdraft", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
