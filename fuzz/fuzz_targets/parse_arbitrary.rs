#![no_main]
use libfuzzer_sys::fuzz_target;

use cmdline::{CmdLine, ParseOutcome, Requirement};

fuzz_target!(|data: &[u8]| {
    // NUL-separated tokens; the first one plays argv[0].
    let argv: Vec<String> = data
        .split(|&b| b == 0)
        .map(|t| String::from_utf8_lossy(t).into_owned())
        .collect();

    let mut cl = CmdLine::new("fuzz");
    cl.register("m", "mesh", "mesh file name.", "", Requirement::Required, &[])
        .unwrap();
    cl.register("np", "npart", "number to be cutting.", "0", Requirement::Optional, &[])
        .unwrap();
    cl.register("p", "part", "partitioner.", "metis", Requirement::Optional, &["metis", "scotch"])
        .unwrap();

    let outcome = cl.parse_from(&argv);

    // Enumerated options never hold a value outside their choice set, even
    // after a failed parse.
    for item in cl.registry().iter() {
        assert!(item.accepts(item.value()), "{} holds '{}'", item.flag(), item.value());
    }

    if let Ok(ParseOutcome::Parsed) = outcome {
        assert!(cl.registry().first_missing_required().is_none());
    }

    // Numeric reads never fail for a registered name.
    let _ = cl.get::<i32>("np").unwrap();
    let _ = cl.get::<f64>("mesh").unwrap();

    assert_eq!(cl.usage().unwrap(), cl.usage().unwrap());
});
