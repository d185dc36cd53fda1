use serde::Serialize;

/// JSON envelope; `ok` is false when the command reports a failure
#[derive(Debug, Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Pretty-printed JSON envelope for `data`
pub fn to_json<T: Serialize>(ok: bool, data: T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&JsonOut { ok, data })?)
}

/// Print rows, as one JSON envelope or one text line each
pub fn print_out<T: Serialize>(
    json: bool,
    ok: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", to_json(ok, data)?);
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

/// Print a single successful result
pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    render: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", to_json(true, &data)?);
    } else {
        println!("{}", render(&data));
    }
    Ok(())
}
