use dominator::{Dom, svg};

fn stroke_icon(size: u32, paths: &[&str]) -> Dom {
    svg!("svg", {
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("width", &size.to_string())
        .attr("height", &size.to_string())
        .attr("viewBox", "0 0 24 24")
        .attr("fill", "none")
        .attr("stroke", "currentColor")
        .attr("stroke-width", "2")
        .attr("stroke-linecap", "round")
        .attr("stroke-linejoin", "round")
        .class("icon")
        .children(paths.iter().map(|d| svg!("path", {
            .attr("d", d)
        })).collect::<Vec<_>>())
    })
}

pub fn dashboard(size: u32) -> Dom {
    stroke_icon(size, &["M3 3h7v9H3z", "M14 3h7v5h-7z", "M14 12h7v9h-7z", "M3 16h7v5H3z"])
}

pub fn library(size: u32) -> Dom {
    stroke_icon(size, &["m16 6 4 14", "M12 6v14", "M8 8v12", "M4 4v16"])
}

pub fn quote(size: u32) -> Dom {
    stroke_icon(size, &[
        "M3 21c3 0 7-1 7-8V5c0-1.25-.756-2.017-2-2H4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .008-1 1.031V20c0 1 0 1 1 1z",
        "M15 21c3 0 7-1 7-8V5c0-1.25-.757-2.017-2-2h-4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z",
    ])
}

pub fn plus(size: u32) -> Dom {
    stroke_icon(size, &["M5 12h14", "M12 5v14"])
}

pub fn trash(size: u32) -> Dom {
    stroke_icon(size, &[
        "M3 6h18",
        "M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6",
        "M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2",
        "M10 11v6",
        "M14 11v6",
    ])
}

pub fn edit(size: u32) -> Dom {
    stroke_icon(size, &[
        "M12 3H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7",
        "M18.375 2.625a2.121 2.121 0 1 1 3 3L12 15l-4 1 1-4Z",
    ])
}

pub fn file_text(size: u32) -> Dom {
    stroke_icon(size, &[
        "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z",
        "M14 2v4a2 2 0 0 0 2 2h4",
        "M10 9H8",
        "M16 13H8",
        "M16 17H8",
    ])
}

pub fn image(size: u32) -> Dom {
    stroke_icon(size, &[
        "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
        "M7 9a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
        "m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21",
    ])
}

pub fn video(size: u32) -> Dom {
    stroke_icon(size, &[
        "m16 13 5.223 3.482a.5.5 0 0 0 .777-.416V7.87a.5.5 0 0 0-.752-.432L16 10.5",
        "M4 6h10a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
    ])
}

pub fn music(size: u32) -> Dom {
    stroke_icon(size, &[
        "M9 18V5l12-2v13",
        "M3 18a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
        "M15 16a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
    ])
}
