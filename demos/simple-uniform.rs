use packbin::Packer;

fn main() {
    env_logger::init();

    let mut packer = Packer::new((256u32, 256));

    // Four of these fit exactly; the fifth has nowhere to go.
    for _ in 0..5 {
        let placement = packer.pack((128, 128));
        println!("Pack result: {:?}", placement);
    }

    println!("{:?}", packer);
}
