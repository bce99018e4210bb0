//! flatcodec command line tool
//!
//! Encodes typed fields into a hex wire image, or decodes an image back
//! given the field types in order.
//!
//! Run with:
//!   cargo run -p flatcodec-cli -- --order big encode i32:42 str:hello f32:1.5
//!   cargo run -p flatcodec-cli -- --order big decode --schema i32,str,f32 0000002a...

mod error;
mod field;
mod hex;

use bytes::BytesMut;
use clap::{Parser, Subcommand};
use flatcodec::{ByteOrder, Codec};
use tracing::{debug, warn, Level};
use tracing_subscriber::FmtSubscriber;

use crate::field::{FieldType, FieldValue};

#[derive(Parser, Debug)]
#[command(name = "flatcodec")]
#[command(about = "Encode and decode flat binary records")]
struct Args {
    /// Byte order of multi-byte values: little, big or native
    #[arg(short, long, default_value = "native", global = true)]
    order: ByteOrder,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode TYPE:VALUE fields and print the image as hex
    Encode {
        #[arg(required = true)]
        fields: Vec<FieldValue>,
    },
    /// Decode a hex image field by field
    Decode {
        /// Comma-separated field types, e.g. i32,str,f32
        #[arg(short, long, value_delimiter = ',', required = true)]
        schema: Vec<FieldType>,

        /// Hex-encoded image
        hex: String,
    },
}

fn encode(ctx: &Codec, fields: &[FieldValue]) -> error::Result<BytesMut> {
    let total: usize = fields.iter().map(FieldValue::encoded_len).sum();
    let mut image = BytesMut::zeroed(total);

    let mut pos = 0;
    for field in fields {
        let n = field.encode(ctx, &mut image, pos)?;
        debug!(offset = pos, size = n, "encoded {}", field);
        pos += n;
    }
    Ok(image)
}

fn decode(ctx: &Codec, schema: &[FieldType], image: &[u8]) -> error::Result<Vec<(usize, FieldValue)>> {
    let mut fields = Vec::with_capacity(schema.len());
    let mut pos = 0;
    for ty in schema {
        let (value, n) = ty.decode(ctx, image, pos)?;
        fields.push((pos, value));
        pos += n;
    }
    if pos < image.len() {
        warn!("{} trailing bytes after last field", image.len() - pos);
    }
    Ok(fields)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let ctx = Codec::new(args.order);
    debug!("byte order: {} (host is {})", ctx.order, ByteOrder::native());

    match args.command {
        Command::Encode { fields } => {
            let image = encode(&ctx, &fields)?;
            println!("{}", hex::encode(&image));
            println!("{} bytes, {} byte order", image.len(), ctx.order);
        }
        Command::Decode { schema, hex: input } => {
            let image = hex::decode(&input)?;
            for (offset, value) in decode(&ctx, &schema, &image)? {
                println!("{:>6}  {}", offset, value);
            }
        }
    }

    Ok(())
}
