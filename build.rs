fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/vegvisir.proto");
    println!("cargo:rerun-if-changed=proto");
    let fds = protox::compile(["proto/vegvisir.proto"], ["proto"])?;
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_fds(fds)?;
    Ok(())
}
