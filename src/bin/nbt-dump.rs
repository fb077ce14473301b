use clap::{App, Arg};
use env_logger::Env;
use flate2::read::{GzDecoder, ZlibDecoder};
use log::{error, info};
use nbt_tree::{from_bytes_with_opts, Compound, DeOpts, Document, Tag, DEFAULT_MAX_DEPTH};
use std::io::{self, Read};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Read all of the input, undoing GZip or zlib compression if present.
fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    let mut raw = vec![];
    match path {
        Some(path) => {
            std::fs::File::open(path)?.read_to_end(&mut raw)?;
        }
        None => {
            io::stdin().read_to_end(&mut raw)?;
        }
    }

    let compression = match raw.as_slice() {
        [0x1f, 0x8b, ..] => Some("gzip"),
        [0x78, 0x01 | 0x5e | 0x9c | 0xda, ..] => Some("zlib"),
        _ => None,
    };
    let compression = match compression {
        Some(c) => c,
        None => return Ok(raw),
    };
    info!("input is {} compressed", compression);

    let mut buf = vec![];
    if compression == "gzip" {
        GzDecoder::new(raw.as_slice()).read_to_end(&mut buf)?;
    } else {
        ZlibDecoder::new(raw.as_slice()).read_to_end(&mut buf)?;
    }

    Ok(buf)
}

fn print_tag(tag: &Tag, indent: usize) {
    match tag {
        Tag::Compound(c) => {
            println!("{} entries", c.len());
            print_compound(c, indent + 4);
        }
        Tag::List(l) => {
            println!("{} entries of {}", l.len(), l.element_id());
            for item in l {
                print!("{:indent$}", "", indent = indent + 4);
                print_tag(item, indent + 4);
            }
        }
        Tag::String(s) => println!("{:?}", s),
        Tag::ByteArray(a) => println!("{} bytes {:?}", a.len(), &a[..]),
        Tag::IntArray(a) => println!("{} ints {:?}", a.len(), &a[..]),
        Tag::LongArray(a) => println!("{} longs {:?}", a.len(), &a[..]),
        Tag::Byte(v) => println!("{}", v),
        Tag::Short(v) => println!("{}", v),
        Tag::Int(v) => println!("{}", v),
        Tag::Long(v) => println!("{}", v),
        Tag::Float(v) => println!("{}", v),
        Tag::Double(v) => println!("{}", v),
        Tag::End => println!(),
    }
}

fn print_compound(c: &Compound, indent: usize) {
    let mut entries: Vec<_> = c.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (name, tag) in entries {
        print!("{:indent$}{} {:?}: ", "", tag.id(), name, indent = indent);
        print_tag(tag, indent);
    }
}

fn print_document(doc: &Document) {
    println!("{:?}: {} entries", doc.root_name(), doc.root().len());
    print_compound(doc.root(), 4);
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let matches = App::new("nbt-dump")
        .about("Print the contents of an NBT file")
        .arg(
            Arg::with_name("file")
                .takes_value(true)
                .required(false)
                .help("NBT file to read, stdin if absent"),
        )
        .arg(
            Arg::with_name("max-depth")
                .long("max-depth")
                .takes_value(true)
                .required(false)
                .help("Deepest nesting to accept, 128 if absent"),
        )
        .arg(
            Arg::with_name("strict")
                .long("strict")
                .takes_value(false)
                .required(false)
                .help("Fail if there is data after the root compound"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .takes_value(false)
                .required(false),
        )
        .get_matches();

    let max_depth = match matches.value_of("max-depth") {
        Some(depth) => depth.parse()?,
        None => DEFAULT_MAX_DEPTH,
    };
    let opts = DeOpts::new()
        .max_depth(max_depth)
        .allow_trailing_data(!matches.is_present("strict"));

    let data = read_input(matches.value_of("file"))?;
    let doc = match from_bytes_with_opts(&data, opts) {
        Ok(doc) => doc,
        Err(e) => {
            error!("{}", e);
            return Err(e.into());
        }
    };

    if matches.is_present("json") {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print_document(&doc);
    }

    Ok(())
}
